pub mod component;
pub mod search_filters;

pub use component::{
    Component, ComponentFields, ComponentId, ParsedPreview, NOT_AVAILABLE, STORAGE_NOT_SPECIFIED,
};
pub use search_filters::SearchFilters;
