/// Mock implementations for testing
mod mock_inventory_api;
mod mock_notifier;

pub use mock_inventory_api::MockInventoryApi;
pub use mock_notifier::MockNotifier;
