//! Builder for constructing InventoryReadModel from a view snapshot

use super::inventory_read_model::{
    InventoryReadModel, SearchSummaryView, SectionView, SimilarView, StatusView,
};
use super::row_view::{PreviewView, RowState, RowView};
use crate::application::state::{LoadStatus, ViewState};
use crate::inventory::domain::Component;
use crate::inventory::services::{compute_grouped_view, GroupedView, HighlightSequence};
use std::collections::BTreeMap;

/// Builder for constructing InventoryReadModel from a [`ViewState`]
///
/// Applies the grouping rules and the current highlight phase: an inserted
/// component is lifted out of its group into `new_component`, and its group
/// is drawn alphabetically while it settles.
pub struct InventoryReadModelBuilder;

impl InventoryReadModelBuilder {
    /// Builds the read model for one snapshot
    ///
    /// # Arguments
    /// * `state` - Current view snapshot
    ///
    /// # Returns
    /// A fully constructed InventoryReadModel
    pub fn build(state: &ViewState) -> InventoryReadModel {
        let highlight = state.highlight().copied();
        let mut grouped = compute_grouped_view(state.components(), state.active_category());

        let new_component = highlight.and_then(|h| Self::lift_new_component(&mut grouped, &h));
        if let Some(h) = highlight.filter(HighlightSequence::sorts_group) {
            grouped.settle_alphabetically(h.component_id());
        }

        let sections = Self::build_sections(&grouped, highlight.as_ref());
        let row_states = Self::build_row_states(&sections, new_component.as_ref());
        let total = row_states.len();

        InventoryReadModel {
            status: Self::build_status(state.status()),
            new_component,
            sections,
            row_states,
            categories: state.categories().to_vec(),
            active_category: state.active_category().map(str::to_string),
            search: state.search().map(|search| SearchSummaryView {
                query: search.query.clone(),
                active_filters: search.filters.active_count(),
            }),
            total,
            duplicate_count: state.components().iter().filter(|c| c.has_similar).count(),
            notice: state.notice().cloned(),
            similar: state.similar().map(|similar| SimilarView {
                component_id: similar.component_id,
                rows: Self::plain_rows(&similar.components),
            }),
            preview: state.preview().map(PreviewView::from),
            llm_parser_enabled: state.llm_parser_enabled(),
        }
    }

    fn build_status(status: &LoadStatus) -> StatusView {
        match status {
            LoadStatus::NotLoaded => StatusView::NotLoaded,
            LoadStatus::Loaded => StatusView::Loaded,
            LoadStatus::Failed(message) => StatusView::Failed(message.clone()),
        }
    }

    fn lift_new_component(
        grouped: &mut GroupedView,
        highlight: &HighlightSequence,
    ) -> Option<RowView> {
        if !highlight.in_new_section() {
            return None;
        }
        grouped
            .detach(highlight.component_id())
            .map(|component| RowView::from_component(&component, true))
    }

    fn build_sections(
        grouped: &GroupedView,
        highlight: Option<&HighlightSequence>,
    ) -> Vec<SectionView> {
        let highlighted_id = highlight
            .filter(|h| h.is_highlighted())
            .map(HighlightSequence::component_id);

        grouped
            .groups()
            .iter()
            .map(|group| SectionView {
                header: grouped.show_headers().then(|| group.category.clone()),
                rows: group
                    .components
                    .iter()
                    .map(|c| RowView::from_component(c, Some(c.id()) == highlighted_id))
                    .collect(),
            })
            .collect()
    }

    fn build_row_states(
        sections: &[SectionView],
        new_component: Option<&RowView>,
    ) -> BTreeMap<crate::inventory::domain::ComponentId, RowState> {
        let mut states = BTreeMap::new();
        if let Some(row) = new_component {
            states.insert(row.id, Self::row_state(row, None, 0));
        }
        for (section_index, section) in sections.iter().enumerate() {
            for (position, row) in section.rows.iter().enumerate() {
                states.insert(row.id, Self::row_state(row, Some(section_index), position));
            }
        }
        states
    }

    fn row_state(row: &RowView, section: Option<usize>, position: usize) -> RowState {
        RowState {
            section,
            position,
            duplicate: row.duplicate,
            zero_quantity: row.zero_quantity,
            highlighted: row.highlighted,
        }
    }

    fn plain_rows(components: &[Component]) -> Vec<RowView> {
        components
            .iter()
            .map(|c| RowView::from_component(c, false))
            .collect()
    }
}
