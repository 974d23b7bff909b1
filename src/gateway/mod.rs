//! Analysis gateway
//!
//! Single abstraction for talking to the remote analysis service: every
//! panel and the chat session issue JSON-body POST calls through
//! [`AnalysisGateway::call`]. The response body is parsed as JSON regardless
//! of transport status; a truthy `error` field is the service's own failure
//! signal and is surfaced before any typed deserialization, so every caller
//! gets the same error-first behavior.

pub mod slot;

pub use slot::{RequestSlot, Ticket};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Endpoint paths of the analysis service.
pub mod endpoints {
    pub const BUDGET_ANALYZE: &str = "/api/budget/analyze";
    pub const LOAN_CHECK: &str = "/api/loan/check";
    pub const SAVINGS_PLAN: &str = "/api/savings/plan";
    pub const RISK_FIXED_INCOME: &str = "/api/risk/fixed-income";
    pub const RISK_BALANCE_SHEET: &str = "/api/risk/balance-sheet";
    pub const RISK_DECISION_IMPACT: &str = "/api/risk/decision-impact";
    pub const CHAT: &str = "/api/chat";
}

/// Errors surfaced by a gateway call.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body is not JSON or doesn't match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service reported an application-level failure via its `error`
    /// field. Displays as the service's own message.
    #[error("{0}")]
    Service(String),
}

/// HTTP client for the analysis service.
///
/// Does not retry, does not time out, and does not cancel in-flight calls;
/// superseded responses are discarded by the caller's [`RequestSlot`].
#[derive(Debug, Clone)]
pub struct AnalysisGateway {
    client: Client,
    base_url: String,
}

impl AnalysisGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one POST-with-JSON-body call and decodes the result.
    pub async fn call<B, R>(&self, endpoint: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        debug!(%request_id, endpoint, "issuing analysis request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        // The body is decoded whatever the transport status was; the service
        // signals application failures through an `error` field.
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%request_id, %status, "non-JSON response body");
            GatewayError::InvalidResponse(e.to_string())
        })?;

        if let Some(message) = service_error(&value) {
            warn!(%request_id, endpoint, %message, "service reported an error");
            return Err(GatewayError::Service(message));
        }

        serde_json::from_value(value).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

/// Extracts a truthy `error` field, if the response carries one.
fn service_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
