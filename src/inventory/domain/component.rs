use crate::shared::error::InventoryError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a missing source or specification
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder shown for a missing storage location
pub const STORAGE_NOT_SPECIFIED: &str = "Not specified";

/// Maximum length accepted for names and categories sent to the server
const MAX_FIELD_LENGTH: usize = 255;

/// Opaque server-assigned identifier of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(u64);

impl ComponentId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ComponentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// An inventory item as returned by the backend.
///
/// The client only ever holds a cached copy. `id` has no setter; the other
/// fields are patched locally only after the server acknowledged a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    pub name: String,
    /// Missing from similar-component rows, which only carry the part itself
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub storage: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub has_similar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Component {
    pub fn new(id: u64, name: &str, category: &str, quantity: u32) -> Self {
        Self {
            id: ComponentId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            source: None,
            storage: None,
            specifications: None,
            has_similar: false,
            created_at: None,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_storage(mut self, storage: &str) -> Self {
        self.storage = Some(storage.to_string());
        self
    }

    pub fn with_specifications(mut self, specifications: &str) -> Self {
        self.specifications = Some(specifications.to_string());
        self
    }

    pub fn with_similar(mut self, has_similar: bool) -> Self {
        self.has_similar = has_similar;
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn is_zero_quantity(&self) -> bool {
        self.quantity == 0
    }

    pub fn source_display(&self) -> &str {
        display_or(self.source.as_deref(), NOT_AVAILABLE)
    }

    pub fn specifications_display(&self) -> &str {
        display_or(self.specifications.as_deref(), NOT_AVAILABLE)
    }

    pub fn storage_display(&self) -> &str {
        display_or(self.storage.as_deref(), STORAGE_NOT_SPECIFIED)
    }

    /// Current field set, the starting point for an edit
    pub fn fields(&self) -> ComponentFields {
        ComponentFields {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            source: self.source.clone(),
            storage: self.storage.clone(),
            specifications: self.specifications.clone(),
        }
    }
}

/// The server sends empty strings for unset text columns
fn display_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// Full editable field set sent with `PUT /api/components/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFields {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub source: Option<String>,
    pub storage: Option<String>,
    pub specifications: Option<String>,
}

impl ComponentFields {
    /// Checks the fields the server requires before anything is sent
    pub fn validate(&self) -> Result<()> {
        validate_label(&self.name, "Name")?;
        validate_label(&self.category, "Category")?;
        Ok(())
    }
}

fn validate_label(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::Validation {
            message: format!("{} cannot be empty", label),
        }
        .into());
    }
    if value.len() > MAX_FIELD_LENGTH {
        return Err(InventoryError::Validation {
            message: format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                label,
                value.len(),
                MAX_FIELD_LENGTH
            ),
        }
        .into());
    }
    Ok(())
}

/// Fields the server parsed out of a free-text description.
///
/// Returned both by the read-only preview and by a successful create; the
/// create response carries no id, so the stored component is found again by
/// `(name, category)` after the next reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPreview {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "text_or_json")]
    pub specifications: Option<String>,
}

/// Parsers may return specifications as a JSON object instead of a string
fn text_or_json<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl ParsedPreview {
    pub fn source_display(&self) -> &str {
        display_or(self.source.as_deref(), NOT_AVAILABLE)
    }

    pub fn specifications_display(&self) -> &str {
        display_or(self.specifications.as_deref(), NOT_AVAILABLE)
    }
}
