/// Outbound adapters - the REST client, stderr notices, output formats and destinations
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
