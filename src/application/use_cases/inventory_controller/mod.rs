use crate::application::dto::Action;
use crate::application::state::{ActiveSearch, Notice, ViewEvent, ViewState};
use crate::inventory::domain::{ComponentFields, ComponentId};
use crate::inventory::services::{FilterBuilder, HighlightTimings, QuantityGuard};
use crate::ports::outbound::{InventoryApi, Notifier};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use tracing::{debug, info, warn};


/// InventoryController - Wires user actions to API calls and view updates
///
/// Work is split in two steps so independent requests can overlap:
/// [`perform`](Self::perform) talks to the API and only *describes* the
/// outcome as [`ViewEvent`]s, [`apply`](Self::apply) folds those events into
/// a new [`ViewState`] snapshot. Events are applied in the order their
/// responses arrive; a response applied later wins.
///
/// # Type Parameters
/// * `A` - InventoryApi implementation
/// * `N` - Notifier implementation
pub struct InventoryController<A, N> {
    api: A,
    notifier: N,
    timings: HighlightTimings,
    state: ViewState,
}

impl<A, N> InventoryController<A, N>
where
    A: InventoryApi,
    N: Notifier,
{
    /// Creates a controller with an empty view and default highlight timings
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            timings: HighlightTimings::default(),
            state: ViewState::new(),
        }
    }

    pub fn with_timings(mut self, timings: HighlightTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Performs `action` and applies its outcome right away
    pub async fn dispatch(&mut self, action: Action) -> &ViewState {
        let events = self.perform(&action).await;
        self.apply(events);
        &self.state
    }

    /// Runs the API calls behind `action` against the current snapshot
    ///
    /// Never fails: errors are turned into notices, and a failed mutation
    /// produces no event that would touch the cached components.
    ///
    /// # Arguments
    /// * `action` - The user action to carry out
    ///
    /// # Returns
    /// Events to hand to [`apply`](Self::apply), possibly none
    pub async fn perform(&self, action: &Action) -> Vec<ViewEvent> {
        debug!(action = action.name(), "performing action");
        match action {
            Action::Reload => self.load(self.state.search().cloned()).await,
            Action::SelectCategory(category) => {
                vec![ViewEvent::CategorySelected(category.clone())]
            }
            Action::Search { query, inputs } => {
                let search = ActiveSearch {
                    query: query.trim().to_string(),
                    filters: FilterBuilder::build_filters(inputs),
                };
                self.load(Some(search)).await
            }
            Action::ClearSearch => self.load(None).await,
            Action::Create { raw_text } => self.create(raw_text).await,
            Action::PreviewParse { raw_text } => self.preview(raw_text).await,
            Action::Update { id, fields } => self.update(*id, fields).await,
            Action::Delete { id } => match self.api.delete_component(*id).await {
                Ok(()) => self.reload_after(format!("Component {} deleted", id)).await,
                Err(err) => vec![Self::failure(action, err)],
            },
            Action::Merge { source, target } => self.merge(*source, *target).await,
            Action::IncrementQuantity { id } => self.step_quantity(*id, QuantityGuard::increment).await,
            Action::DecrementQuantity { id } => self.step_quantity(*id, QuantityGuard::decrement).await,
            Action::SetQuantity { id, quantity } => self.set_quantity(*id, *quantity).await,
            Action::SetStorage { id, storage } => match self.api.set_storage(*id, storage).await {
                Ok(()) => vec![
                    ViewEvent::StoragePatched {
                        id: *id,
                        storage: storage.clone(),
                    },
                    ViewEvent::Notified(Notice::Success(format!(
                        "Storage of component {} set to \"{}\"",
                        id, storage
                    ))),
                ],
                Err(err) => vec![Self::failure(action, err)],
            },
            Action::FetchSimilar { id } => match self.api.fetch_similar(*id).await {
                Ok(mut components) => {
                    // Similar parts share the category of the part they resemble
                    if let Some(source) = self.state.component(*id) {
                        for row in components.iter_mut().filter(|c| c.category.is_empty()) {
                            row.category = source.category.clone();
                        }
                    }
                    vec![ViewEvent::SimilarFound {
                        component_id: *id,
                        components,
                    }]
                }
                Err(err) => vec![Self::failure(action, err)],
            },
            Action::ToggleParser => match self.api.toggle_llm_parser().await {
                Ok(enabled) => vec![
                    ViewEvent::ParserToggled(enabled),
                    ViewEvent::Notified(Notice::Info(format!(
                        "LLM parser {}",
                        if enabled { "enabled" } else { "disabled" }
                    ))),
                ],
                Err(err) => vec![Self::failure(action, err)],
            },
        }
    }

    /// Folds `events` into the view state in order, forwarding notices
    pub fn apply(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            self.announce(&event);
            let state = std::mem::take(&mut self.state);
            self.state = state.reduce(event);
        }
    }

    /// Plays the post-create highlight to its end
    ///
    /// `on_frame` sees the snapshot of every phase, including the final one
    /// with the highlight removed. Returns immediately when nothing is
    /// highlighted.
    pub async fn run_highlight<F>(&mut self, mut on_frame: F)
    where
        F: FnMut(&ViewState),
    {
        while let Some(delay) = self
            .state
            .highlight()
            .and_then(|h| h.delay_before_next(&self.timings))
        {
            on_frame(&self.state);
            tokio::time::sleep(delay).await;
            self.apply(vec![ViewEvent::HighlightAdvanced]);
        }
        on_frame(&self.state);
    }

    fn announce(&self, event: &ViewEvent) {
        match event {
            ViewEvent::Notified(Notice::Info(message)) => self.notifier.info(message),
            ViewEvent::Notified(Notice::Success(message)) => self.notifier.success(message),
            ViewEvent::Notified(Notice::Error(message)) => self.notifier.error(message),
            ViewEvent::LoadFailed { message } => self
                .notifier
                .error(&format!("Failed to load components: {}", message)),
            _ => {}
        }
    }

    async fn load(&self, search: Option<ActiveSearch>) -> Vec<ViewEvent> {
        self.notifier.loading_started("Loading components...");
        let result = match &search {
            Some(active) => {
                self.api
                    .search_components(&active.query, &active.filters)
                    .await
            }
            None => self.api.list_components().await,
        };
        self.notifier.loading_finished();

        match result {
            Ok(components) => {
                debug!(count = components.len(), searched = search.is_some(), "components loaded");
                vec![ViewEvent::Loaded { components, search }]
            }
            Err(err) => {
                warn!(error = %err, "loading components failed");
                vec![ViewEvent::LoadFailed {
                    message: err.to_string(),
                }]
            }
        }
    }

    /// Success notice followed by a refetch of whatever the view shows
    async fn reload_after(&self, message: String) -> Vec<ViewEvent> {
        info!("{}", message);
        let mut events = vec![ViewEvent::Notified(Notice::Success(message))];
        events.extend(self.load(self.state.search().cloned()).await);
        events
    }

    async fn create(&self, raw_text: &str) -> Vec<ViewEvent> {
        if let Err(err) = require_description(raw_text) {
            return vec![Self::notice_error(err)];
        }

        self.notifier.loading_started("Adding component...");
        let created = self.api.create_component(raw_text).await;
        self.notifier.loading_finished();

        let stored = match created {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "create failed");
                return vec![Self::notice_error(err)];
            }
        };
        info!(name = %stored.name, category = %stored.category, "component added");

        let success = ViewEvent::Notified(Notice::Success(
            "Component added successfully".to_string(),
        ));
        // A create always lands in the full list, whatever search was active
        match self.load(None).await.pop() {
            Some(ViewEvent::Loaded { components, search }) => vec![
                success,
                ViewEvent::Created {
                    stored,
                    components,
                    search,
                },
            ],
            Some(other) => vec![success, other],
            None => vec![success],
        }
    }

    async fn preview(&self, raw_text: &str) -> Vec<ViewEvent> {
        if let Err(err) = require_description(raw_text) {
            return vec![Self::notice_error(err)];
        }
        match self.api.preview_parse(raw_text).await {
            Ok(preview) => vec![ViewEvent::PreviewReady(preview)],
            Err(err) => vec![Self::notice_error(err)],
        }
    }

    async fn update(&self, id: ComponentId, fields: &ComponentFields) -> Vec<ViewEvent> {
        if let Err(err) = fields.validate() {
            return vec![Self::notice_error(err)];
        }
        match self.api.update_component(id, fields).await {
            Ok(updated) => {
                self.reload_after(format!("Component \"{}\" updated", updated.name))
                    .await
            }
            Err(err) => {
                warn!(id = %id, error = %err, "update failed");
                vec![Self::notice_error(err)]
            }
        }
    }

    async fn merge(&self, source: ComponentId, target: ComponentId) -> Vec<ViewEvent> {
        if source == target {
            return vec![Self::notice_error(
                InventoryError::Validation {
                    message: "Cannot merge a component into itself".to_string(),
                }
                .into(),
            )];
        }
        match self.api.merge_components(source, target).await {
            Ok(()) => {
                self.reload_after(format!(
                    "Component {} merged into component {}",
                    source, target
                ))
                .await
            }
            Err(err) => {
                warn!(source = %source, target = %target, error = %err, "merge failed");
                vec![Self::notice_error(err)]
            }
        }
    }

    /// Increments or decrements the cached quantity by one.
    ///
    /// When the guard refuses the step (decrement at zero) no request is sent
    /// and no event is produced.
    async fn step_quantity(
        &self,
        id: ComponentId,
        step: fn(u32) -> Option<u32>,
    ) -> Vec<ViewEvent> {
        let Some(component) = self.state.component(id) else {
            return vec![Self::notice_error(
                InventoryError::UnknownComponent { id: id.value() }.into(),
            )];
        };
        match step(component.quantity) {
            Some(quantity) => self.set_quantity(id, quantity).await,
            None => {
                debug!(id = %id, quantity = component.quantity, "quantity step skipped");
                Vec::new()
            }
        }
    }

    async fn set_quantity(&self, id: ComponentId, quantity: u32) -> Vec<ViewEvent> {
        match self.api.set_quantity(id, quantity).await {
            Ok(()) => vec![
                ViewEvent::QuantityPatched { id, quantity },
                ViewEvent::Notified(Notice::Success(format!(
                    "Quantity of component {} set to {}",
                    id, quantity
                ))),
            ],
            Err(err) => {
                warn!(id = %id, error = %err, "quantity update failed");
                vec![Self::notice_error(err)]
            }
        }
    }

    fn failure(action: &Action, err: anyhow::Error) -> ViewEvent {
        warn!(action = action.name(), error = %err, "action failed");
        Self::notice_error(err)
    }

    fn notice_error(err: anyhow::Error) -> ViewEvent {
        ViewEvent::Notified(Notice::Error(err.to_string()))
    }
}

/// Blank descriptions are rejected locally; anything else is relayed as typed
fn require_description(raw_text: &str) -> Result<()> {
    if raw_text.trim().is_empty() {
        return Err(InventoryError::Validation {
            message: "Please enter a component description".to_string(),
        }
        .into());
    }
    Ok(())
}
