//! Immutable view state and its reducer.
//!
//! [`ViewState`] is the single source of truth for what the inventory view
//! shows. It is never edited in place: every [`ViewEvent`] produces a new
//! snapshot through [`ViewState::reduce`]. Events are applied in arrival
//! order, so a stale reload applied after a local patch simply overwrites it.

use super::view_event::{Notice, ViewEvent};
use crate::inventory::domain::{Component, ComponentId, ParsedPreview, SearchFilters};
use crate::inventory::services::{available_categories, HighlightSequence};

/// Outcome of the most recent read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing fetched yet
    #[default]
    NotLoaded,
    Loaded,
    /// The last list/search request failed; no rows are shown
    Failed(String),
}

/// Search currently applied to the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSearch {
    pub query: String,
    pub filters: SearchFilters,
}

/// Components the server flagged as similar to one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarComponents {
    pub component_id: ComponentId,
    pub components: Vec<Component>,
}

/// Snapshot of the inventory view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    components: Vec<Component>,
    categories: Vec<String>,
    active_category: Option<String>,
    search: Option<ActiveSearch>,
    status: LoadStatus,
    highlight: Option<HighlightSequence>,
    notice: Option<Notice>,
    similar: Option<SimilarComponents>,
    preview: Option<ParsedPreview>,
    llm_parser_enabled: Option<bool>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the next snapshot
    #[must_use]
    pub fn reduce(self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::Loaded { components, search } => {
                // Category pickers list everything, so only full loads refresh them
                let categories = if search.is_none() {
                    available_categories(&components)
                } else {
                    self.categories
                };
                let highlight = self
                    .highlight
                    .filter(|h| components.iter().any(|c| c.id() == h.component_id()));
                Self {
                    components,
                    categories,
                    search,
                    status: LoadStatus::Loaded,
                    highlight,
                    ..self
                }
            }
            ViewEvent::LoadFailed { message } => Self {
                components: Vec::new(),
                status: LoadStatus::Failed(message.clone()),
                highlight: None,
                notice: Some(Notice::Error(message)),
                ..self
            },
            ViewEvent::Created {
                stored,
                components,
                search,
            } => {
                let highlight = HighlightSequence::locate(&components, &stored.name, &stored.category);
                let next = self.reduce(ViewEvent::Loaded { components, search });
                Self { highlight, ..next }
            }
            ViewEvent::CategorySelected(active_category) => Self {
                active_category,
                ..self
            },
            ViewEvent::QuantityPatched { id, quantity } => {
                self.patch(id, |component| component.quantity = quantity)
            }
            ViewEvent::StoragePatched { id, storage } => {
                self.patch(id, |component| component.storage = Some(storage))
            }
            ViewEvent::HighlightAdvanced => Self {
                highlight: self
                    .highlight
                    .map(HighlightSequence::advance)
                    .filter(|h| !h.is_finished()),
                ..self
            },
            ViewEvent::HighlightDismissed => Self {
                highlight: None,
                ..self
            },
            ViewEvent::PreviewReady(preview) => Self {
                preview: Some(preview),
                ..self
            },
            ViewEvent::SimilarFound {
                component_id,
                components,
            } => Self {
                similar: Some(SimilarComponents {
                    component_id,
                    components,
                }),
                ..self
            },
            ViewEvent::ParserToggled(enabled) => Self {
                llm_parser_enabled: Some(enabled),
                ..self
            },
            ViewEvent::Notified(notice) => Self {
                notice: Some(notice),
                ..self
            },
        }
    }

    /// Applies `change` to the cached component with `id`, if it is still cached
    fn patch(mut self, id: ComponentId, change: impl FnOnce(&mut Component)) -> Self {
        if let Some(component) = self.components.iter_mut().find(|c| c.id() == id) {
            change(component);
        }
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Sorted categories of the last full load
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn search(&self) -> Option<&ActiveSearch> {
        self.search.as_ref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn highlight(&self) -> Option<&HighlightSequence> {
        self.highlight.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn similar(&self) -> Option<&SimilarComponents> {
        self.similar.as_ref()
    }

    pub fn preview(&self) -> Option<&ParsedPreview> {
        self.preview.as_ref()
    }

    pub fn llm_parser_enabled(&self) -> Option<bool> {
        self.llm_parser_enabled
    }

    /// True when the last reported outcome was a failure
    pub fn has_error(&self) -> bool {
        matches!(self.notice, Some(Notice::Error(_)))
    }
}
