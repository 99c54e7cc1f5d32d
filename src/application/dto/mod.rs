/// Data Transfer Objects for application layer
///
/// DTOs carry user intent into the controller and presentation choices out
/// to the adapters, keeping the inventory domain isolated from both.
mod action;
mod output_format;

pub use action::Action;
pub use output_format::OutputFormat;
