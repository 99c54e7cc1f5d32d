use async_trait::async_trait;
use parts_inventory::prelude::*;
use std::sync::{Arc, Mutex};

/// In-memory InventoryApi that behaves like a small backend.
///
/// Clones share the same store and call log, so a test can keep a handle
/// after moving one into the controller.
#[derive(Default, Clone)]
pub struct MockInventoryApi {
    pub store: Arc<Mutex<Vec<Component>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    /// What the parser "understands" from any create/preview text
    pub parsed: Option<ParsedPreview>,
    /// Acknowledge creates without storing anything
    pub discard_creates: bool,
}

impl MockInventoryApi {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            store: Arc::new(Mutex::new(components)),
            ..Default::default()
        }
    }

    pub fn with_parsed(mut self, name: &str, category: &str, quantity: u32) -> Self {
        self.parsed = Some(ParsedPreview {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            source: None,
            specifications: None,
        });
        self
    }

    pub fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn with_discarded_creates(mut self) -> Self {
        self.discard_creates = true;
        self
    }

    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, id: u64) -> Option<Component> {
        self.store
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == ComponentId::new(id))
            .cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_write(&self, operation: &str) -> Result<()> {
        if self.fail_writes {
            return Err(InventoryError::Transport {
                operation: operation.to_string(),
                details: "HTTP 500: Internal Server Error".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn exists(&self, id: ComponentId) -> bool {
        self.store.lock().unwrap().iter().any(|c| c.id() == id)
    }

    fn not_found(operation: &str, id: ComponentId) -> anyhow::Error {
        InventoryError::Logical {
            operation: operation.to_string(),
            message: format!("Component {} not found", id),
        }
        .into()
    }
}

#[async_trait]
impl InventoryApi for MockInventoryApi {
    async fn list_components(&self) -> Result<Vec<Component>> {
        self.record("list".to_string());
        if self.fail_reads {
            return Err(InventoryError::Transport {
                operation: "list components".to_string(),
                details: "HTTP 503: Service Unavailable".to_string(),
            }
            .into());
        }
        Ok(self.store.lock().unwrap().clone())
    }

    async fn search_components(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Component>> {
        self.record(format!("search:{}", query));
        if self.fail_reads {
            return Err(InventoryError::Transport {
                operation: "search components".to_string(),
                details: "HTTP 503: Service Unavailable".to_string(),
            }
            .into());
        }
        let needle = query.to_lowercase();
        Ok(self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .filter(|c| {
                filters
                    .categories
                    .as_ref()
                    .map_or(true, |set| set.contains(&c.category))
            })
            .filter(|c| filters.show_zero_quantity.map_or(true, |zero| c.is_zero_quantity() == zero))
            .cloned()
            .collect())
    }

    async fn create_component(&self, raw_text: &str) -> Result<ParsedPreview> {
        self.record(format!("create:{}", raw_text));
        self.check_write("create component")?;
        let parsed = self.parsed.clone().ok_or_else(|| InventoryError::Parse {
            input: raw_text.to_string(),
            message: "No parser result configured".to_string(),
        })?;
        if self.discard_creates {
            return Ok(parsed);
        }

        let mut store = self.store.lock().unwrap();
        let next_id = store.iter().map(|c| c.id().value()).max().unwrap_or(0) + 1;
        store.push(Component::new(
            next_id,
            &parsed.name,
            &parsed.category,
            parsed.quantity,
        ));
        Ok(parsed)
    }

    async fn preview_parse(&self, raw_text: &str) -> Result<ParsedPreview> {
        self.record(format!("preview:{}", raw_text));
        self.parsed.clone().ok_or_else(|| {
            InventoryError::Parse {
                input: raw_text.to_string(),
                message: "No parser result configured".to_string(),
            }
            .into()
        })
    }

    async fn update_component(
        &self,
        id: ComponentId,
        fields: &ComponentFields,
    ) -> Result<Component> {
        self.record(format!("update:{}", id));
        self.check_write("update component")?;
        let mut store = self.store.lock().unwrap();
        let component = store
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| Self::not_found("update component", id))?;
        component.name = fields.name.clone();
        component.category = fields.category.clone();
        component.quantity = fields.quantity;
        component.source = fields.source.clone();
        component.storage = fields.storage.clone();
        component.specifications = fields.specifications.clone();
        Ok(component.clone())
    }

    async fn delete_component(&self, id: ComponentId) -> Result<()> {
        self.record(format!("delete:{}", id));
        self.check_write("delete component")?;
        if !self.exists(id) {
            return Err(Self::not_found("delete component", id));
        }
        self.store.lock().unwrap().retain(|c| c.id() != id);
        Ok(())
    }

    async fn merge_components(&self, source_id: ComponentId, target_id: ComponentId) -> Result<()> {
        self.record(format!("merge:{}:{}", source_id, target_id));
        self.check_write("merge components")?;
        if !self.exists(source_id) || !self.exists(target_id) {
            return Err(InventoryError::Merge {
                source_id: source_id.value(),
                target_id: target_id.value(),
                message: "Component not found".to_string(),
            }
            .into());
        }
        let mut store = self.store.lock().unwrap();
        let moved = store
            .iter()
            .find(|c| c.id() == source_id)
            .map(|c| c.quantity)
            .unwrap_or(0);
        if let Some(target) = store.iter_mut().find(|c| c.id() == target_id) {
            target.quantity += moved;
        }
        store.retain(|c| c.id() != source_id);
        Ok(())
    }

    async fn set_quantity(&self, id: ComponentId, quantity: u32) -> Result<()> {
        self.record(format!("quantity:{}:{}", id, quantity));
        self.check_write("set quantity")?;
        let mut store = self.store.lock().unwrap();
        let component = store
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| Self::not_found("set quantity", id))?;
        component.quantity = quantity;
        Ok(())
    }

    async fn set_storage(&self, id: ComponentId, location: &str) -> Result<()> {
        self.record(format!("storage:{}:{}", id, location));
        self.check_write("set storage")?;
        let mut store = self.store.lock().unwrap();
        let component = store
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| Self::not_found("set storage", id))?;
        component.storage = Some(location.to_string());
        Ok(())
    }

    async fn fetch_similar(&self, id: ComponentId) -> Result<Vec<Component>> {
        self.record(format!("similar:{}", id));
        let store = self.store.lock().unwrap();
        let category = store
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.category.clone())
            .ok_or_else(|| Self::not_found("fetch similar", id))?;
        Ok(store
            .iter()
            .filter(|c| c.id() != id && c.category == category)
            .cloned()
            .collect())
    }

    async fn toggle_llm_parser(&self) -> Result<bool> {
        self.record("toggle".to_string());
        Ok(true)
    }
}
