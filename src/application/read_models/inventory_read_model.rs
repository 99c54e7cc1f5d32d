//! Inventory read model for presentation
//!
//! Aggregates everything a formatter needs into one denormalized struct, so
//! formatters never touch domain services.

use super::row_view::{PreviewView, RowState, RowView};
use crate::application::state::Notice;
use crate::inventory::domain::ComponentId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shown when a load succeeded but returned nothing
pub const EMPTY_MESSAGE: &str = "No components found";

/// Main read model for the inventory view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReadModel {
    pub status: StatusView,
    /// Freshly created component, drawn above the grouped sections
    pub new_component: Option<RowView>,
    pub sections: Vec<SectionView>,
    pub row_states: BTreeMap<ComponentId, RowState>,
    /// Sorted categories for the category picker
    pub categories: Vec<String>,
    pub active_category: Option<String>,
    pub search: Option<SearchSummaryView>,
    pub total: usize,
    pub duplicate_count: usize,
    pub notice: Option<Notice>,
    pub similar: Option<SimilarView>,
    pub preview: Option<PreviewView>,
    pub llm_parser_enabled: Option<bool>,
}

impl InventoryReadModel {
    /// Text for the empty-table row, if the table is empty
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.status {
            StatusView::Loaded if self.total == 0 => Some(EMPTY_MESSAGE),
            _ => None,
        }
    }

    /// Human-readable duplicate alert, if the server flagged any
    pub fn duplicate_warning(&self) -> Option<String> {
        match self.duplicate_count {
            0 => None,
            1 => Some("Detected 1 potential duplicate in inventory".to_string()),
            n => Some(format!("Detected {} potential duplicates in inventory", n)),
        }
    }
}

/// Load status as presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum StatusView {
    NotLoaded,
    Loaded,
    Failed(String),
}

impl StatusView {
    /// Banner text for a failed load
    pub fn failure_banner(&self) -> Option<String> {
        match self {
            StatusView::Failed(message) => Some(format!("Failed to load components: {}", message)),
            _ => None,
        }
    }
}

/// One category section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Category header; `None` while a single category is selected
    pub header: Option<String>,
    pub rows: Vec<RowView>,
}

/// Active search as presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummaryView {
    pub query: String,
    pub active_filters: usize,
}

/// Similar components of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarView {
    pub component_id: ComponentId,
    pub rows: Vec<RowView>,
}
