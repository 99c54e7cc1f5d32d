//! Row view structs for the inventory read model
//!
//! These structs carry display-ready strings; placeholders for missing
//! optional fields are already substituted.

use crate::inventory::domain::{Component, ComponentId, ParsedPreview};
use serde::Serialize;

pub const FLAG_NEW: &str = "NEW";
pub const FLAG_DUPLICATE: &str = "DUPLICATE";
pub const FLAG_OUT_OF_STOCK: &str = "OUT OF STOCK";

/// View representation of one component row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: ComponentId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub source: String,
    pub storage: String,
    pub specifications: String,
    /// Server flagged a potential duplicate
    pub duplicate: bool,
    pub zero_quantity: bool,
    /// Part of the post-create highlight
    pub highlighted: bool,
}

impl RowView {
    pub fn from_component(component: &Component, highlighted: bool) -> Self {
        Self {
            id: component.id(),
            name: component.name.clone(),
            category: component.category.clone(),
            quantity: component.quantity,
            source: component.source_display().to_string(),
            storage: component.storage_display().to_string(),
            specifications: component.specifications_display().to_string(),
            duplicate: component.has_similar,
            zero_quantity: component.is_zero_quantity(),
            highlighted,
        }
    }

    /// Short markers for the row, in display order
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.highlighted {
            flags.push(FLAG_NEW);
        }
        if self.duplicate {
            flags.push(FLAG_DUPLICATE);
        }
        if self.zero_quantity {
            flags.push(FLAG_OUT_OF_STOCK);
        }
        flags
    }
}

/// Where a row is drawn and how it is marked.
///
/// Kept per component id so adapters never look rows up by display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowState {
    /// Index into `sections`, or `None` while in the "new component" slot
    pub section: Option<usize>,
    /// Position inside its section
    pub position: usize,
    pub duplicate: bool,
    pub zero_quantity: bool,
    pub highlighted: bool,
}

/// Parsed fields as shown before anything is stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub source: String,
    pub specifications: String,
}

impl From<&ParsedPreview> for PreviewView {
    fn from(preview: &ParsedPreview) -> Self {
        Self {
            name: preview.name.clone(),
            category: preview.category.clone(),
            quantity: preview.quantity,
            source: preview.source_display().to_string(),
            specifications: preview.specifications_display().to_string(),
        }
    }
}
