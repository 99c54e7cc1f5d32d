use crate::inventory::domain::{Component, ComponentId};
use std::collections::{BTreeMap, BTreeSet};

/// Components sharing one category, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    pub category: String,
    pub components: Vec<Component>,
}

/// Category-grouped presentation of a component list.
///
/// Groups are ordered by category name. Inside a group the input order is
/// kept, because the server already returns its own ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedView {
    groups: Vec<ComponentGroup>,
    show_headers: bool,
}

impl GroupedView {
    /// Groups `components` for display.
    ///
    /// With an `active_category`, only exact matches are kept and they form a
    /// single implicit group whose header is suppressed.
    pub fn compute(components: &[Component], active_category: Option<&str>) -> Self {
        if let Some(category) = active_category {
            let matching: Vec<Component> = components
                .iter()
                .filter(|c| c.category == category)
                .cloned()
                .collect();
            let groups = if matching.is_empty() {
                Vec::new()
            } else {
                vec![ComponentGroup {
                    category: category.to_string(),
                    components: matching,
                }]
            };
            return Self {
                groups,
                show_headers: false,
            };
        }

        let mut by_category: BTreeMap<&str, Vec<Component>> = BTreeMap::new();
        for component in components {
            by_category
                .entry(component.category.as_str())
                .or_default()
                .push(component.clone());
        }

        Self {
            groups: by_category
                .into_iter()
                .map(|(category, components)| ComponentGroup {
                    category: category.to_string(),
                    components,
                })
                .collect(),
            show_headers: true,
        }
    }

    pub fn groups(&self) -> &[ComponentGroup] {
        &self.groups
    }

    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of components across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.components.len()).sum()
    }

    /// Component ids in display order, across all groups
    pub fn ordered_ids(&self) -> Vec<ComponentId> {
        self.groups
            .iter()
            .flat_map(|g| g.components.iter().map(Component::id))
            .collect()
    }

    /// Re-orders the group holding `id` alphabetically by name, ignoring case.
    ///
    /// Used once a freshly created component settles into place.
    pub fn settle_alphabetically(&mut self, id: ComponentId) {
        if let Some(group) = self
            .groups
            .iter_mut()
            .find(|g| g.components.iter().any(|c| c.id() == id))
        {
            group.components.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
    }

    /// Takes the component with `id` out of its group, dropping the group if it empties
    pub fn detach(&mut self, id: ComponentId) -> Option<Component> {
        let (group_index, position) = self.groups.iter().enumerate().find_map(|(gi, g)| {
            g.components
                .iter()
                .position(|c| c.id() == id)
                .map(|pos| (gi, pos))
        })?;
        let component = self.groups[group_index].components.remove(position);
        if self.groups[group_index].components.is_empty() {
            self.groups.remove(group_index);
        }
        Some(component)
    }
}

/// Groups components by category; see [`GroupedView::compute`]
pub fn compute_grouped_view(
    components: &[Component],
    active_category: Option<&str>,
) -> GroupedView {
    GroupedView::compute(components, active_category)
}

/// Sorted unique categories, used to populate category pickers
pub fn available_categories(components: &[Component]) -> Vec<String> {
    components
        .iter()
        .map(|c| c.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
