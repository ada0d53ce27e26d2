use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::types::{HistoryEntry, Insights, Role, Sentiment};
use crate::state::chat::{ERROR_TEXT, SEARCHING_TEXT, TurnPhase};

const NOW: f64 = 1_736_962_200_000.0;

fn clock() -> f64 {
    NOW
}

fn entry(role: Role, content: &str) -> HistoryEntry {
    HistoryEntry::new(role, content)
}

fn summary(text: &str) -> Summary {
    Summary {
        sentiment: Sentiment::Neutral,
        keywords: vec![],
        summary: text.to_owned(),
        department: "Sales".to_owned(),
        insights: Insights {
            urgency: "low".to_owned(),
            upsell_opportunity: false,
            customer_interest: "general".to_owned(),
            additional_notes: None,
        },
    }
}

fn snapshot(requests: u64) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_requests: requests,
        ..AnalyticsSnapshot::default()
    }
}

// =============================================================
// Doubles
// =============================================================

#[derive(Default)]
struct MockTransport {
    chat_resp: RefCell<Option<Result<ChatResponse, ApiError>>>,
    tool_resp: RefCell<Option<Result<ToolCallResponse, ApiError>>>,
    calls: RefCell<Vec<&'static str>>,
    tool_request: RefCell<Option<ToolCallRequest>>,
}

impl ChatTransport for MockTransport {
    async fn send_chat(&self, _req: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.calls.borrow_mut().push("chat");
        self.chat_resp
            .borrow_mut()
            .take()
            .expect("unexpected /chat call")
    }

    async fn send_tool_call_result(
        &self,
        req: &ToolCallRequest,
    ) -> Result<ToolCallResponse, ApiError> {
        self.calls.borrow_mut().push("tool-call-result");
        *self.tool_request.borrow_mut() = Some(req.clone());
        self.tool_resp
            .borrow_mut()
            .take()
            .expect("unexpected /tool-call-result call")
    }
}

struct MockOutput {
    chat: RefCell<ChatState>,
    summaries: RefCell<Vec<Summary>>,
    snapshots: RefCell<Vec<AnalyticsSnapshot>>,
}

impl MockOutput {
    fn new() -> Self {
        Self {
            chat: RefCell::new(ChatState::new(NOW)),
            summaries: RefCell::new(Vec::new()),
            snapshots: RefCell::new(Vec::new()),
        }
    }

    fn transcript_texts(&self) -> Vec<String> {
        self.chat
            .borrow()
            .transcript
            .iter()
            .map(|e| e.text.clone())
            .collect()
    }
}

impl TurnOutput for MockOutput {
    fn update_chat<F: FnOnce(&mut ChatState)>(&self, f: F) {
        f(&mut self.chat.borrow_mut());
    }

    fn summary_received(&self, summary: Summary) {
        self.summaries.borrow_mut().push(summary);
    }

    fn analytics_received(&self, snapshot: AnalyticsSnapshot) {
        self.snapshots.borrow_mut().push(snapshot);
    }
}

// =============================================================
// Plain turns
// =============================================================

#[test]
fn plain_turn_makes_one_call_and_two_transcript_entries() {
    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() = Some(Ok(ChatResponse {
        chat_response: "hello back".to_owned(),
        conversation_history: vec![entry(Role::User, "hi"), entry(Role::Assistant, "hello back")],
        tool_call_detected: false,
        summary: None,
        analytics: None,
    }));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "hi", clock));

    assert_eq!(*transport.calls.borrow(), vec!["chat"]);
    assert_eq!(out.chat.borrow().transcript.len(), 3); // greeting + user + bot
    assert_eq!(out.chat.borrow().phase, TurnPhase::Idle);
    assert!(out.summaries.borrow().is_empty());
}

#[test]
fn blank_message_makes_no_network_calls() {
    let transport = MockTransport::default();
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "   ", clock));

    assert!(transport.calls.borrow().is_empty());
    assert_eq!(out.chat.borrow().transcript.len(), 1);
}

#[test]
fn submit_while_turn_in_flight_makes_no_calls() {
    let transport = MockTransport::default();
    let out = MockOutput::new();
    out.chat.borrow_mut().begin_turn("first", NOW).expect("accepted");

    block_on(run_turn(&transport, &out, "second", clock));

    assert!(transport.calls.borrow().is_empty());
}

// =============================================================
// Tool-call turns
// =============================================================

#[test]
fn tool_call_turn_makes_two_ordered_calls_and_three_entries() {
    let mid_history = vec![entry(Role::User, "What SUVs do you have?"), entry(Role::Tool, "search")];
    let final_history = vec![
        entry(Role::User, "What SUVs do you have?"),
        entry(Role::Assistant, "We have 3 SUVs in stock."),
    ];

    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() = Some(Ok(ChatResponse {
        chat_response: String::new(),
        conversation_history: mid_history.clone(),
        tool_call_detected: true,
        summary: None,
        analytics: None,
    }));
    *transport.tool_resp.borrow_mut() = Some(Ok(ToolCallResponse {
        final_response: "We have 3 SUVs in stock.".to_owned(),
        final_conversation_history: final_history.clone(),
        summary: None,
        analytics: None,
    }));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "What SUVs do you have?", clock));

    assert_eq!(*transport.calls.borrow(), vec!["chat", "tool-call-result"]);
    // The follow-up request carries exactly the history the primary
    // response returned.
    assert_eq!(
        transport.tool_request.borrow().as_ref().unwrap().conversation_history,
        mid_history
    );
    assert_eq!(
        out.transcript_texts(),
        vec![
            "Hello! How can I help you today?".to_owned(),
            "What SUVs do you have?".to_owned(),
            SEARCHING_TEXT.to_owned(),
            "We have 3 SUVs in stock.".to_owned(),
        ]
    );
    assert_eq!(out.chat.borrow().history, final_history);
    assert_eq!(out.chat.borrow().phase, TurnPhase::Idle);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn primary_failure_appends_apology_and_leaves_history_unchanged() {
    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() =
        Some(Err(ApiError::Network("connection refused".to_owned())));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "hello", clock));

    assert_eq!(*transport.calls.borrow(), vec!["chat"]);
    let texts = out.transcript_texts();
    assert_eq!(texts.last().unwrap(), ERROR_TEXT);
    assert_eq!(texts.len(), 3); // greeting + user + apology
    assert!(out.chat.borrow().history.is_empty());
    assert_eq!(out.chat.borrow().phase, TurnPhase::Idle);
}

#[test]
fn secondary_failure_keeps_history_from_primary_response() {
    let mid_history = vec![entry(Role::User, "SUVs?"), entry(Role::Tool, "search")];

    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() = Some(Ok(ChatResponse {
        chat_response: String::new(),
        conversation_history: mid_history.clone(),
        tool_call_detected: true,
        summary: None,
        analytics: None,
    }));
    *transport.tool_resp.borrow_mut() = Some(Err(ApiError::Server(500)));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "SUVs?", clock));

    assert_eq!(*transport.calls.borrow(), vec!["chat", "tool-call-result"]);
    assert_eq!(out.transcript_texts().last().unwrap(), ERROR_TEXT);
    assert_eq!(out.chat.borrow().history, mid_history);
    assert_eq!(out.chat.borrow().phase, TurnPhase::Idle);
}

// =============================================================
// Summary and analytics forwarding
// =============================================================

#[test]
fn plain_turn_forwards_summary_and_analytics_once() {
    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() = Some(Ok(ChatResponse {
        chat_response: "reply".to_owned(),
        conversation_history: vec![],
        tool_call_detected: false,
        summary: Some(summary("wrap-up")),
        analytics: Some(snapshot(5)),
    }));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "hello", clock));

    assert_eq!(out.summaries.borrow().len(), 1);
    assert_eq!(out.summaries.borrow()[0].summary, "wrap-up");
    assert_eq!(out.snapshots.borrow().len(), 1);
    assert_eq!(out.snapshots.borrow()[0].total_requests, 5);
}

#[test]
fn tool_call_turn_forwards_analytics_from_both_phases() {
    let transport = MockTransport::default();
    *transport.chat_resp.borrow_mut() = Some(Ok(ChatResponse {
        chat_response: String::new(),
        conversation_history: vec![],
        tool_call_detected: true,
        summary: None,
        analytics: Some(snapshot(5)),
    }));
    *transport.tool_resp.borrow_mut() = Some(Ok(ToolCallResponse {
        final_response: "done".to_owned(),
        final_conversation_history: vec![],
        summary: Some(summary("tool wrap-up")),
        analytics: Some(snapshot(6)),
    }));
    let out = MockOutput::new();

    block_on(run_turn(&transport, &out, "SUVs?", clock));

    let requests: Vec<u64> = out.snapshots.borrow().iter().map(|s| s.total_requests).collect();
    assert_eq!(requests, vec![5, 6]);
    assert_eq!(out.summaries.borrow().len(), 1);
    assert_eq!(out.summaries.borrow()[0].summary, "tool wrap-up");
}

#[test]
fn declined_update_chat_stops_the_turn() {
    // A torn-down view declines to run closures; the driver must not call
    // the network at all.
    struct DeadOutput;
    impl TurnOutput for DeadOutput {
        fn update_chat<F: FnOnce(&mut ChatState)>(&self, _f: F) {}
        fn summary_received(&self, _summary: Summary) {
            panic!("summary after teardown");
        }
        fn analytics_received(&self, _snapshot: AnalyticsSnapshot) {
            panic!("analytics after teardown");
        }
    }

    let transport = MockTransport::default();
    block_on(run_turn(&transport, &DeadOutput, "hello", clock));
    assert!(transport.calls.borrow().is_empty());
}
