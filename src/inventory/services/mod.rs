mod filter_builder;
mod grouped_view;
mod highlight;
mod quantity_guard;

pub use filter_builder::{FilterBuilder, FilterInputs};
pub use grouped_view::{available_categories, compute_grouped_view, ComponentGroup, GroupedView};
pub use highlight::{HighlightPhase, HighlightSequence, HighlightTimings};
pub use quantity_guard::QuantityGuard;
