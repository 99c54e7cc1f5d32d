/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend API, console, file system).
pub mod formatter;
pub mod inventory_api;
pub mod notifier;
pub mod output_presenter;

pub use formatter::InventoryFormatter;
pub use inventory_api::InventoryApi;
pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
