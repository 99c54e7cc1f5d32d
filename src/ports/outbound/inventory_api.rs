use crate::inventory::domain::{
    Component, ComponentFields, ComponentId, ParsedPreview, SearchFilters,
};
use crate::shared::Result;
use async_trait::async_trait;

/// InventoryApi port for talking to the inventory backend
///
/// This port abstracts the REST API that owns and persists components.
/// Errors raised by implementations should be
/// [`InventoryError`](crate::shared::error::InventoryError) values so callers
/// can tell transport failures from logical ones.
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` so that
/// independent requests can be in flight at the same time; there is no
/// deduplication or cancellation.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetches every component, including the server-computed `has_similar` flag
    async fn list_components(&self) -> Result<Vec<Component>>;

    /// Runs a free-text search combined with structured filters
    ///
    /// # Arguments
    /// * `query` - Text matched against name, specifications, source, category and storage
    /// * `filters` - Constraints; unset fields are not sent
    async fn search_components(&self, query: &str, filters: &SearchFilters)
        -> Result<Vec<Component>>;

    /// Creates a component from a free-text description
    ///
    /// The raw text is relayed unmodified; parsing happens on the server.
    ///
    /// # Returns
    /// The fields the server stored. The response carries no id.
    ///
    /// # Errors
    /// Returns a `Parse` error if the server cannot interpret the text
    async fn create_component(&self, raw_text: &str) -> Result<ParsedPreview>;

    /// Parses a description without storing anything
    async fn preview_parse(&self, raw_text: &str) -> Result<ParsedPreview>;

    /// Replaces all editable fields of a component
    async fn update_component(&self, id: ComponentId, fields: &ComponentFields)
        -> Result<Component>;

    /// Deletes a component
    async fn delete_component(&self, id: ComponentId) -> Result<()>;

    /// Folds `source_id` into `target_id` and removes the source
    ///
    /// # Errors
    /// Returns a `Merge` error if either id is unknown to the server
    async fn merge_components(&self, source_id: ComponentId, target_id: ComponentId)
        -> Result<()>;

    /// Sets an absolute quantity
    async fn set_quantity(&self, id: ComponentId, quantity: u32) -> Result<()>;

    /// Sets the storage location
    async fn set_storage(&self, id: ComponentId, location: &str) -> Result<()>;

    /// Lists components the server considers likely duplicates of `id`
    async fn fetch_similar(&self, id: ComponentId) -> Result<Vec<Component>>;

    /// Flips the server's parser mode and returns whether the LLM parser is now enabled
    async fn toggle_llm_parser(&self) -> Result<bool>;
}
