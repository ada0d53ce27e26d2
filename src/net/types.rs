//! Wire types for the dealership backend API.
//!
//! Every payload is a typed struct with explicit optional fields rather than
//! a free-form JSON map, so malformed responses fail at the transport
//! boundary instead of deep inside the UI. Field renames mirror the backend
//! JSON exactly, including its mixed camelCase / snake_case analytics names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role tag on a conversation history entry, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One backend-shaped conversation history entry.
///
/// The history sequence echoed back by the server is authoritative; the
/// client appends locally but never reorders or deletes entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl HistoryEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub chat_response: String,
    pub conversation_history: Vec<HistoryEntry>,
    pub tool_call_detected: bool,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub analytics: Option<AnalyticsSnapshot>,
}

/// Request body for `POST /tool-call-result`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub conversation_history: Vec<HistoryEntry>,
}

/// Response body for `POST /tool-call-result`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ToolCallResponse {
    pub final_response: String,
    pub final_conversation_history: Vec<HistoryEntry>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub analytics: Option<AnalyticsSnapshot>,
}

/// Post-turn conversation summary produced by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub summary: String,
    pub department: String,
    pub insights: Insights,
}

/// Overall sentiment classification for a conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Routing and follow-up hints attached to a [`Summary`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub urgency: String,
    pub upsell_opportunity: bool,
    pub customer_interest: String,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// Aggregate usage metrics from `GET /analytics/summary`.
///
/// `Default` is the zeroed snapshot used for the optimistic reset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub average_cost_per_request: f64,
    #[serde(default)]
    pub total_sent_tokens: u64,
    #[serde(default)]
    pub total_received_tokens: u64,
    #[serde(default)]
    pub average_latency: f64,
    #[serde(default)]
    pub requests_by_date: Vec<RequestRecord>,
    #[serde(default)]
    pub cost_by_model: BTreeMap<String, f64>,
}

impl AnalyticsSnapshot {
    /// Sent + received tokens across all requests.
    pub fn total_tokens(&self) -> u64 {
        self.total_sent_tokens + self.total_received_tokens
    }
}

/// One row of the per-request analytics table.
///
/// The backend emits camelCase for the token counts but keeps `latency_ms`
/// and `log_id` in snake_case; the renames below preserve that split.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub model: String,
    #[serde(rename = "sentTokens", default)]
    pub sent_tokens: u64,
    #[serde(rename = "receivedTokens", default)]
    pub received_tokens: u64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub latency_ms: f64,
    #[serde(default)]
    pub log_id: Option<i64>,
}

impl RequestRecord {
    pub fn total_tokens(&self) -> u64 {
        self.sent_tokens + self.received_tokens
    }
}

/// Response body for `POST /analytics/reset`.
#[derive(Clone, Debug, Deserialize)]
pub struct ResetResponse {
    pub analytics: AnalyticsSnapshot,
}

/// One stored backend-call log record from `GET /analytics/openai-log/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallLogRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub request_prompt: Option<String>,
    #[serde(default)]
    pub request_payload: Option<serde_json::Value>,
    #[serde(default)]
    pub request_sent_at: Option<String>,
    #[serde(default)]
    pub response_json: Option<serde_json::Value>,
    #[serde(default)]
    pub response_received_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One vehicle record from `GET /inventory`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub stock_number: String,
    pub vin: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub mileage: Option<u64>,
    #[serde(default)]
    pub color: Option<String>,
}
