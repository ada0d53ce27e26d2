//! Async driver for one conversation turn.
//!
//! Sequences the two-phase protocol around the pure transitions on
//! [`ChatState`]: primary `/chat` call, then, only if that response signals
//! a tool call and has been fully applied, the `/tool-call-result` call.
//! The secondary request is never issued speculatively or concurrently.
//!
//! The driver is generic over two seams so tests can run it against doubles:
//! [`ChatTransport`] (the wire) and [`TurnOutput`] (the view). In the app
//! these are [`ApiClient`] and a signal-backed sink in the chat page.

#[cfg(test)]
#[path = "turn_test.rs"]
mod turn_test;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{AnalyticsSnapshot, ChatRequest, ChatResponse, Summary, ToolCallRequest, ToolCallResponse};
use crate::state::chat::{ChatState, PrimaryOutcome};

/// The two chat round-trips, as the driver sees them.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatResponse, ApiError>;
    async fn send_tool_call_result(
        &self,
        req: &ToolCallRequest,
    ) -> Result<ToolCallResponse, ApiError>;
}

impl ChatTransport for ApiClient {
    async fn send_chat(&self, req: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post_json("/chat", req).await
    }

    async fn send_tool_call_result(
        &self,
        req: &ToolCallRequest,
    ) -> Result<ToolCallResponse, ApiError> {
        self.post_json("/tool-call-result", req).await
    }
}

/// Where turn results land.
///
/// `update_chat` may decline to run its closure (torn-down view); the driver
/// treats that the same as a rejected submission and stops.
pub trait TurnOutput {
    fn update_chat<F: FnOnce(&mut ChatState)>(&self, f: F);
    fn summary_received(&self, summary: Summary);
    fn analytics_received(&self, snapshot: AnalyticsSnapshot);
}

/// Run one complete turn for `message`.
///
/// Failures at either phase resolve into the apology transcript entry and
/// an `Idle` phase; history stays whatever the last successful response set
/// it to. Analytics snapshots are forwarded exactly once per response that
/// carries one.
pub async fn run_turn<T, O, C>(client: &T, out: &O, message: &str, clock: C)
where
    T: ChatTransport,
    O: TurnOutput,
    C: Fn() -> f64,
{
    let mut request = None;
    out.update_chat(|chat| request = chat.begin_turn(message, clock()));
    let Some(request) = request else {
        // Blank message or a turn already in flight.
        return;
    };

    let resp = match client.send_chat(&request).await {
        Ok(resp) => resp,
        Err(_) => {
            out.update_chat(|chat| chat.fail_turn(clock()));
            return;
        }
    };

    if let Some(snapshot) = resp.analytics.clone() {
        out.analytics_received(snapshot);
    }

    let mut outcome = None;
    out.update_chat(|chat| outcome = Some(chat.apply_primary(&resp, clock())));

    match outcome {
        Some(PrimaryOutcome::Complete) => {
            if let Some(summary) = resp.summary {
                out.summary_received(summary);
            }
        }
        Some(PrimaryOutcome::ToolCallPending(tool_req)) => {
            match client.send_tool_call_result(&tool_req).await {
                Ok(final_resp) => {
                    if let Some(snapshot) = final_resp.analytics.clone() {
                        out.analytics_received(snapshot);
                    }
                    out.update_chat(|chat| chat.apply_tool_result(&final_resp, clock()));
                    if let Some(summary) = final_resp.summary {
                        out.summary_received(summary);
                    }
                }
                Err(_) => {
                    out.update_chat(|chat| chat.fail_turn(clock()));
                }
            }
        }
        None => {}
    }
}
