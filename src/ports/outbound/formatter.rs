use crate::application::read_models::InventoryReadModel;
use crate::shared::Result;

/// InventoryFormatter port for rendering the inventory view
///
/// This port abstracts how the read model is turned into text
/// (terminal table, Markdown, JSON).
pub trait InventoryFormatter {
    /// Formats the inventory read model
    ///
    /// # Arguments
    /// * `model` - Grouped rows, status and summary of the current view
    ///
    /// # Returns
    /// Formatted content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &InventoryReadModel) -> Result<String>;
}
