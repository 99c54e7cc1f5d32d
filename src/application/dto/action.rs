use crate::inventory::domain::{ComponentFields, ComponentId};
use crate::inventory::services::FilterInputs;

/// A typed user action handled by the inventory controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Refetch the current view (active search, or the full list)
    Reload,
    /// Restrict the grouped view to one category; `None` shows all
    SelectCategory(Option<String>),
    /// Submit the search form
    Search { query: String, inputs: FilterInputs },
    /// Drop the active search and load the full list
    ClearSearch,
    /// Store a component described in free text; the server parses it
    Create { raw_text: String },
    /// Ask the server how it would parse `raw_text`, without storing it
    PreviewParse { raw_text: String },
    Update { id: ComponentId, fields: ComponentFields },
    Delete { id: ComponentId },
    /// Fold `source` into `target`; `source` is removed
    Merge { source: ComponentId, target: ComponentId },
    IncrementQuantity { id: ComponentId },
    /// No-op once the cached quantity is zero
    DecrementQuantity { id: ComponentId },
    SetQuantity { id: ComponentId, quantity: u32 },
    SetStorage { id: ComponentId, storage: String },
    FetchSimilar { id: ComponentId },
    /// Switch the server between its LLM and rule-based parsers
    ToggleParser,
}

impl Action {
    /// Short label used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reload => "reload",
            Action::SelectCategory(_) => "select_category",
            Action::Search { .. } => "search",
            Action::ClearSearch => "clear_search",
            Action::Create { .. } => "create",
            Action::PreviewParse { .. } => "preview_parse",
            Action::Update { .. } => "update",
            Action::Delete { .. } => "delete",
            Action::Merge { .. } => "merge",
            Action::IncrementQuantity { .. } => "increment_quantity",
            Action::DecrementQuantity { .. } => "decrement_quantity",
            Action::SetQuantity { .. } => "set_quantity",
            Action::SetStorage { .. } => "set_storage",
            Action::FetchSimilar { .. } => "fetch_similar",
            Action::ToggleParser => "toggle_parser",
        }
    }

    /// Whether a success must be followed by a full reload
    pub fn requires_reload(&self) -> bool {
        matches!(
            self,
            Action::Create { .. }
                | Action::Update { .. }
                | Action::Delete { .. }
                | Action::Merge { .. }
        )
    }
}
