use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::InventoryFormatter;

/// Factory for creating inventory formatters
///
/// Encapsulates the selection of formatter adapters from an [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `color` - Whether terminal output may use ANSI colors
    ///
    /// # Examples
    /// ```
    /// use parts_inventory::application::dto::OutputFormat;
    /// use parts_inventory::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn InventoryFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(color)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
