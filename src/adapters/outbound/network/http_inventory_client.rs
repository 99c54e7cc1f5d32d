use crate::inventory::domain::{
    Component, ComponentFields, ComponentId, ParsedPreview, SearchFilters,
};
use crate::ports::outbound::InventoryApi;
use crate::shared::error::InventoryError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Longest response excerpt quoted in error details
const MAX_BODY_EXCERPT: usize = 200;

#[derive(Debug, Serialize)]
struct RawInput<'a> {
    input: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    filters: &'a SearchFilters,
}

#[derive(Debug, Serialize)]
struct MergeRequest {
    source_id: ComponentId,
    target_id: ComponentId,
}

#[derive(Debug, Serialize)]
struct QuantityRequest {
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct StorageRequest<'a> {
    storage: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    parsed_data: ParsedPreview,
}

#[derive(Debug, Deserialize)]
struct ToggleResponse {
    llm_enabled: bool,
}

/// Update responses come wrapped as `{message, component}`; older servers
/// return the bare row
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpdateResponse {
    Wrapped { component: Component },
    Bare(Component),
}

impl UpdateResponse {
    fn into_component(self) -> Component {
        match self {
            UpdateResponse::Wrapped { component } | UpdateResponse::Bare(component) => component,
        }
    }
}

/// What the server answered, before it is classified
#[derive(Debug)]
enum Reply {
    Body(Value),
    /// A body carrying an `error` field, on any status
    Rejected { status: StatusCode, message: String },
    /// Non-2xx without an `error` field
    Failed { status: StatusCode, body: String },
}

/// HttpInventoryClient adapter for the inventory REST API
///
/// Implements the InventoryApi port over JSON/HTTP. Every response body is
/// checked for an `error` field, including 2xx responses, so logical
/// failures are reported even when the status says otherwise.
///
/// # Async Support
/// Uses the async reqwest client; requests are independent and may overlap.
pub struct HttpInventoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// Creates a client for the server at `base_url`
    ///
    /// # Arguments
    /// * `base_url` - Scheme, host and port, e.g. `http://127.0.0.1:5000`
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::normalize_base_url(base_url)?;
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("parts-inventory/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn normalize_base_url(base_url: &str) -> Result<String> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
            Some(_) => Err(InventoryError::Validation {
                message: format!("Base URL has no host: \"{}\"", base_url),
            }
            .into()),
            None => Err(InventoryError::Validation {
                message: format!(
                    "Base URL must start with http:// or https://, got \"{}\"",
                    base_url
                ),
            }
            .into()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and reads the whole body
    async fn execute(&self, operation: &str, request: reqwest::RequestBuilder) -> Result<Reply> {
        let response = request
            .send()
            .await
            .map_err(|e| transport(operation, e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport(operation, e.to_string()))?;
        debug!(operation, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(Self::classify(status, &body))
    }

    fn classify(status: StatusCode, body: &str) -> Reply {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let error = parsed
            .as_ref()
            .and_then(|value| value.get("error"))
            .filter(|error| !error.is_null())
            .map(|error| match error {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            });

        match (error, parsed) {
            (Some(message), _) => Reply::Rejected { status, message },
            (None, Some(value)) if status.is_success() => Reply::Body(value),
            (None, None) if status.is_success() && body.trim().is_empty() => {
                Reply::Body(Value::Null)
            }
            _ => Reply::Failed {
                status,
                body: excerpt(body),
            },
        }
    }

    /// Default classification: `error` on 2xx is logical, anything else non-2xx is transport
    fn expect_body(operation: &str, reply: Reply) -> Result<Value> {
        match reply {
            Reply::Body(value) => Ok(value),
            Reply::Rejected { status, message } if status.is_success() => {
                Err(InventoryError::Logical {
                    operation: operation.to_string(),
                    message,
                }
                .into())
            }
            Reply::Rejected { status, message } => {
                Err(transport(operation, format!("HTTP {}: {}", status, message)))
            }
            Reply::Failed { status, body } => {
                Err(transport(operation, format!("HTTP {}: {}", status, body)))
            }
        }
    }

    fn decode<T: DeserializeOwned>(operation: &str, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| {
            InventoryError::UnexpectedResponse {
                operation: operation.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Create and preview share the parser's failure mode
    async fn parse_request(&self, operation: &str, path: &str, raw_text: &str) -> Result<Value> {
        let request = self
            .client
            .post(self.url(path))
            .json(&RawInput { input: raw_text });
        match self.execute(operation, request).await? {
            Reply::Rejected { status, message }
                if status == StatusCode::BAD_REQUEST || status.is_success() =>
            {
                Err(InventoryError::Parse {
                    input: raw_text.to_string(),
                    message,
                }
                .into())
            }
            reply => Self::expect_body(operation, reply),
        }
    }
}

/// Builds a Transport error
fn transport(operation: &str, details: String) -> anyhow::Error {
    InventoryError::Transport {
        operation: operation.to_string(),
        details,
    }
    .into()
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_EXCERPT {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
    format!("{}...", cut)
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn list_components(&self) -> Result<Vec<Component>> {
        let operation = "list components";
        let reply = self
            .execute(operation, self.client.get(self.url("/api/components")))
            .await?;
        Self::decode(operation, Self::expect_body(operation, reply)?)
    }

    async fn search_components(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Component>> {
        let operation = "search components";
        let request = self
            .client
            .post(self.url("/api/components/search"))
            .json(&SearchRequest { query, filters });
        let reply = self.execute(operation, request).await?;
        Self::decode(operation, Self::expect_body(operation, reply)?)
    }

    async fn create_component(&self, raw_text: &str) -> Result<ParsedPreview> {
        let operation = "create component";
        let value = self
            .parse_request(operation, "/api/components", raw_text)
            .await?;
        let created: CreateResponse = Self::decode(operation, value)?;
        Ok(created.parsed_data)
    }

    async fn preview_parse(&self, raw_text: &str) -> Result<ParsedPreview> {
        let operation = "parse component description";
        let value = self.parse_request(operation, "/api/parse", raw_text).await?;
        Self::decode(operation, value)
    }

    async fn update_component(
        &self,
        id: ComponentId,
        fields: &ComponentFields,
    ) -> Result<Component> {
        let operation = "update component";
        let request = self
            .client
            .put(self.url(&format!("/api/components/{}", id)))
            .json(fields);
        let reply = self.execute(operation, request).await?;
        let updated: UpdateResponse = Self::decode(operation, Self::expect_body(operation, reply)?)?;
        Ok(updated.into_component())
    }

    async fn delete_component(&self, id: ComponentId) -> Result<()> {
        let operation = "delete component";
        let request = self.client.delete(self.url(&format!("/api/components/{}", id)));
        let reply = self.execute(operation, request).await?;
        Self::expect_body(operation, reply).map(|_| ())
    }

    async fn merge_components(
        &self,
        source_id: ComponentId,
        target_id: ComponentId,
    ) -> Result<()> {
        let operation = "merge components";
        let request = self
            .client
            .post(self.url("/api/components/merge"))
            .json(&MergeRequest {
                source_id,
                target_id,
            });
        match self.execute(operation, request).await? {
            Reply::Rejected { message, .. } => Err(InventoryError::Merge {
                source_id: source_id.value(),
                target_id: target_id.value(),
                message,
            }
            .into()),
            Reply::Failed { status, .. } if status == StatusCode::NOT_FOUND => {
                Err(InventoryError::Merge {
                    source_id: source_id.value(),
                    target_id: target_id.value(),
                    message: "Unknown component id".to_string(),
                }
                .into())
            }
            reply => Self::expect_body(operation, reply).map(|_| ()),
        }
    }

    async fn set_quantity(&self, id: ComponentId, quantity: u32) -> Result<()> {
        let operation = "update quantity";
        let request = self
            .client
            .post(self.url(&format!("/api/components/{}/quantity", id)))
            .json(&QuantityRequest { quantity });
        let reply = self.execute(operation, request).await?;
        Self::expect_body(operation, reply).map(|_| ())
    }

    async fn set_storage(&self, id: ComponentId, location: &str) -> Result<()> {
        let operation = "update storage location";
        let request = self
            .client
            .post(self.url(&format!("/api/components/{}/storage", id)))
            .json(&StorageRequest { storage: location });
        let reply = self.execute(operation, request).await?;
        Self::expect_body(operation, reply).map(|_| ())
    }

    async fn fetch_similar(&self, id: ComponentId) -> Result<Vec<Component>> {
        let operation = "fetch similar components";
        let request = self
            .client
            .get(self.url(&format!("/api/components/{}/similar", id)));
        let reply = self.execute(operation, request).await?;
        Self::decode(operation, Self::expect_body(operation, reply)?)
    }

    async fn toggle_llm_parser(&self) -> Result<bool> {
        let operation = "toggle parser";
        let request = self.client.post(self.url("/api/toggle-llm"));
        let reply = self.execute(operation, request).await?;
        let toggled: ToggleResponse = Self::decode(operation, Self::expect_body(operation, reply)?)?;
        Ok(toggled.llm_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> HttpInventoryClient {
        HttpInventoryClient::new(base_url, Duration::from_secs(2)).unwrap()
    }

    fn inventory_error(err: anyhow::Error) -> InventoryError {
        err.downcast::<InventoryError>().unwrap()
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = client("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
        assert_eq!(
            client.url("/api/components/3/similar"),
            "http://127.0.0.1:5000/api/components/3/similar"
        );
    }

    #[test]
    fn test_new_rejects_missing_scheme() {
        let result = HttpInventoryClient::new("127.0.0.1:5000", Duration::from_secs(1));
        let err = inventory_error(result.err().unwrap());
        assert!(matches!(err, InventoryError::Validation { .. }));
    }

    #[test]
    fn test_new_rejects_missing_host() {
        let result = HttpInventoryClient::new("http://", Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_error_field_on_success_is_logical() {
        let reply = HttpInventoryClient::classify(StatusCode::OK, r#"{"error": "Quantity must be a number"}"#);
        let err = HttpInventoryClient::expect_body("update quantity", reply).unwrap_err();
        let err = inventory_error(err);
        assert!(err.is_logical());
        assert!(err.to_string().contains("Quantity must be a number"));
    }

    #[test]
    fn test_classify_server_error_is_transport() {
        let reply = HttpInventoryClient::classify(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        let err = inventory_error(HttpInventoryClient::expect_body("list components", reply).unwrap_err());
        assert!(err.is_transport());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_classify_error_field_on_failure_status_is_transport() {
        let reply = HttpInventoryClient::classify(StatusCode::BAD_REQUEST, r#"{"error": "No data provided"}"#);
        let err = inventory_error(HttpInventoryClient::expect_body("update component", reply).unwrap_err());
        assert!(err.is_transport());
        assert!(err.to_string().contains("No data provided"));
    }

    #[test]
    fn test_classify_null_error_field_is_ignored() {
        let reply = HttpInventoryClient::classify(StatusCode::OK, r#"{"error": null, "message": "ok"}"#);
        let value = HttpInventoryClient::expect_body("delete component", reply).unwrap();
        assert_eq!(value["message"], "ok");
    }

    #[test]
    fn test_classify_empty_success_body() {
        let reply = HttpInventoryClient::classify(StatusCode::OK, "");
        assert!(matches!(reply, Reply::Body(Value::Null)));
    }

    #[test]
    fn test_decode_component_list() {
        let value = serde_json::json!([
            {"id": 1, "name": "LED", "category": "Optics", "quantity": 3, "has_similar": false},
            {"id": 2, "name": "LED red", "category": "Optics", "quantity": 0, "has_similar": true}
        ]);
        let components: Vec<Component> = HttpInventoryClient::decode("list components", value).unwrap();
        assert_eq!(components.len(), 2);
        assert!(components[1].has_similar);
    }

    #[test]
    fn test_decode_similar_rows_without_category() {
        let value = serde_json::json!([
            {"id": 4, "name": "10k resistor", "specifications": "0805", "source": "Digikey", "quantity": 3}
        ]);
        let similar: Vec<Component> =
            HttpInventoryClient::decode("fetch similar components", value).unwrap();
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id(), ComponentId::new(4));
        assert_eq!(similar[0].name, "10k resistor");
        assert_eq!(similar[0].quantity, 3);
        assert_eq!(similar[0].source.as_deref(), Some("Digikey"));
        assert_eq!(similar[0].specifications.as_deref(), Some("0805"));
        assert!(similar[0].category.is_empty());
        assert!(!similar[0].has_similar);
    }

    #[test]
    fn test_decode_malformed_body_is_unexpected_response() {
        let value = serde_json::json!({"unexpected": true});
        let err = HttpInventoryClient::decode::<Vec<Component>>("list components", value).unwrap_err();
        let err = inventory_error(err);
        assert!(matches!(err, InventoryError::UnexpectedResponse { .. }));
        assert!(!err.is_transport());
        assert!(!err.to_string().contains("server is running"));
    }

    #[test]
    fn test_update_response_accepts_both_shapes() {
        let wrapped = serde_json::json!({
            "message": "Component updated successfully",
            "component": {"id": 5, "name": "Relay", "category": "Switches", "quantity": 2}
        });
        let bare = serde_json::json!({"id": 5, "name": "Relay", "category": "Switches", "quantity": 2});

        for value in [wrapped, bare] {
            let response: UpdateResponse = serde_json::from_value(value).unwrap();
            let component = response.into_component();
            assert_eq!(component.id(), ComponentId::new(5));
            assert_eq!(component.name, "Relay");
        }
    }

    #[test]
    fn test_create_response_carries_parsed_fields() {
        let value = serde_json::json!({
            "message": "Component added successfully",
            "parsed_data": {"name": "10k resistor", "category": "Resistors", "quantity": 2, "source": null}
        });
        let response: CreateResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.parsed_data.name, "10k resistor");
        assert_eq!(response.parsed_data.quantity, 2);
    }

    #[test]
    fn test_search_request_omits_unset_filters() {
        let filters = SearchFilters {
            min_quantity: Some(2),
            ..Default::default()
        };
        let body = serde_json::to_value(SearchRequest {
            query: "resistor",
            filters: &filters,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"query": "resistor", "filters": {"min_quantity": 2}})
        );
    }

    #[test]
    fn test_merge_request_uses_integer_ids() {
        let body = serde_json::to_value(MergeRequest {
            source_id: ComponentId::new(3),
            target_id: ComponentId::new(9),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"source_id": 3, "target_id": 9}));
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(MAX_BODY_EXCERPT + 50);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), MAX_BODY_EXCERPT + 3);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = client("http://127.0.0.1:1");
        let err = client.list_components().await.unwrap_err();
        let err = inventory_error(err);
        assert!(err.is_transport());
        assert!(err.to_string().contains("list components"));
    }
}
