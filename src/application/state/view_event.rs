use crate::inventory::domain::{Component, ComponentId, ParsedPreview};
use serde::Serialize;

use super::view_state::ActiveSearch;

/// User-visible, non-blocking notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Success(message) | Notice::Error(message) => message,
        }
    }
}

/// What happened, as seen by the view.
///
/// Produced by the controller from API responses and consumed by
/// [`super::ViewState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A list or search response; replaces the cached snapshot
    Loaded {
        components: Vec<Component>,
        search: Option<ActiveSearch>,
    },
    /// A list or search request failed
    LoadFailed { message: String },
    /// A create succeeded and the follow-up reload returned `components`
    Created {
        stored: ParsedPreview,
        components: Vec<Component>,
        search: Option<ActiveSearch>,
    },
    CategorySelected(Option<String>),
    QuantityPatched { id: ComponentId, quantity: u32 },
    StoragePatched { id: ComponentId, storage: String },
    HighlightAdvanced,
    HighlightDismissed,
    PreviewReady(ParsedPreview),
    SimilarFound {
        component_id: ComponentId,
        components: Vec<Component>,
    },
    ParserToggled(bool),
    Notified(Notice),
}
