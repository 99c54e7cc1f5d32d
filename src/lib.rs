//! parts-inventory - terminal client for an electronic-parts inventory backend
//!
//! This library holds the client-side view and sync logic for the
//! `components` REST API: it keeps a cached snapshot of the inventory,
//! turns user actions into API calls, and folds the results back into the
//! snapshot without ever patching data the server did not acknowledge.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Components, search filters, grouping and the highlight state machine
//! - **Application Layer** (`application`): The controller, view state reducer and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, formatters, console and file output
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use parts_inventory::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let api = HttpInventoryClient::new("http://127.0.0.1:5000", Duration::from_secs(30))?;
//! let mut controller = InventoryController::new(api, StderrNotifier::default());
//!
//! controller.dispatch(Action::Reload).await;
//! let model = InventoryReadModelBuilder::build(controller.state());
//! println!("{}", TableFormatter::new(false).format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrNotifier;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::network::HttpInventoryClient;
    pub use crate::application::dto::{Action, OutputFormat};
    pub use crate::application::read_models::{InventoryReadModel, InventoryReadModelBuilder};
    pub use crate::application::state::{Notice, ViewEvent, ViewState};
    pub use crate::application::use_cases::InventoryController;
    pub use crate::inventory::domain::{
        Component, ComponentFields, ComponentId, ParsedPreview, SearchFilters,
    };
    pub use crate::inventory::services::{
        compute_grouped_view, FilterBuilder, FilterInputs, GroupedView, HighlightPhase,
        HighlightSequence, HighlightTimings, QuantityGuard,
    };
    pub use crate::ports::outbound::{InventoryApi, InventoryFormatter, Notifier, OutputPresenter};
    pub use crate::shared::error::InventoryError;
    pub use crate::shared::Result;
}
