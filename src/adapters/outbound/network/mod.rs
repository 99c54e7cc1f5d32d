/// Network adapters for the inventory REST API
mod http_inventory_client;

pub use http_inventory_client::HttpInventoryClient;
