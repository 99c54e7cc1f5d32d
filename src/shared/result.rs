/// Crate-wide result type.
///
/// Client-side failures are `InventoryError` values wrapped in `anyhow::Error`;
/// callers that need the variant use `downcast_ref::<InventoryError>()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
