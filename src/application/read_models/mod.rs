//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a denormalized, display-ready
//! representation of the current inventory snapshot.

mod inventory_read_model;
mod inventory_read_model_builder;
mod row_view;

pub use inventory_read_model::{
    InventoryReadModel, SearchSummaryView, SectionView, SimilarView, StatusView, EMPTY_MESSAGE,
};
pub use inventory_read_model_builder::InventoryReadModelBuilder;
pub use row_view::{
    PreviewView, RowState, RowView, FLAG_DUPLICATE, FLAG_NEW, FLAG_OUT_OF_STOCK,
};
