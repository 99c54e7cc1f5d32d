mod view_event;
mod view_state;

pub use view_event::{Notice, ViewEvent};
pub use view_state::{ActiveSearch, LoadStatus, SimilarComponents, ViewState};
