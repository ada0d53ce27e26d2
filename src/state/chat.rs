//! Conversation state and the per-turn orchestration state machine.
//!
//! DESIGN
//! ======
//! The transcript (display-facing) and the conversation history
//! (backend-facing prompt context) are kept as two separate append-only
//! sequences. All turn transitions are plain synchronous methods on
//! [`ChatState`] so the full state machine is testable without a browser;
//! the async driver in `net::turn` only sequences network calls between
//! transitions.
//!
//! Per-turn phases: `Idle -> AwaitingPrimary -> Idle` for a plain reply, or
//! `Idle -> AwaitingPrimary -> AwaitingToolCall -> Idle` when the backend
//! signals a tool call. Only `Idle` accepts a new turn, which makes
//! "tool call in progress while not loading" unrepresentable.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatRequest, ChatResponse, HistoryEntry, Role, ToolCallRequest, ToolCallResponse};
use crate::util::time::format_est;

/// Greeting seeded into the transcript when a session starts.
pub const GREETING_TEXT: &str = "Hello! How can I help you today?";

/// Interim entry shown while a tool-call resolution round-trip is pending.
pub const SEARCHING_TEXT: &str = "Please wait while I search our inventory.";

/// Generic apology appended when either phase of a turn fails.
pub const ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again later.";

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One display-facing chat entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp_ms: f64,
}

impl TranscriptEntry {
    fn new(sender: Sender, text: impl Into<String>, timestamp_ms: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            timestamp_ms,
        }
    }
}

/// Where the current turn stands. Only `Idle` accepts a new submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    Idle,
    AwaitingPrimary,
    AwaitingToolCall,
}

/// What `apply_primary` decided about the rest of the turn.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryOutcome {
    /// Direct reply, turn complete.
    Complete,
    /// Backend signalled a tool call; issue this follow-up request.
    ToolCallPending(ToolCallRequest),
}

/// Transcript, backend history, and turn phase for one chat session.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub transcript: Vec<TranscriptEntry>,
    pub history: Vec<HistoryEntry>,
    pub phase: TurnPhase,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ChatState {
    /// Fresh session with the greeting already in the transcript.
    pub fn new(now_ms: f64) -> Self {
        Self {
            transcript: vec![TranscriptEntry::new(Sender::Bot, GREETING_TEXT, now_ms)],
            history: Vec::new(),
            phase: TurnPhase::Idle,
        }
    }

    /// True while a turn is in flight; the input surface disables itself on
    /// this and `begin_turn` re-asserts it.
    pub fn busy(&self) -> bool {
        self.phase != TurnPhase::Idle
    }

    /// Start a turn for `message`.
    ///
    /// Returns `None` without mutating anything when the trimmed message is
    /// empty or a turn is already in flight. Otherwise appends the user
    /// transcript entry, enters `AwaitingPrimary`, and returns the request
    /// to send: local history plus a system entry carrying the current EST
    /// time and a user entry with the message. Local history itself is not
    /// touched here; it only changes when the backend echoes it back.
    pub fn begin_turn(&mut self, message: &str, now_ms: f64) -> Option<ChatRequest> {
        let message = message.trim();
        if message.is_empty() || self.busy() {
            return None;
        }

        self.transcript
            .push(TranscriptEntry::new(Sender::User, message, now_ms));
        self.phase = TurnPhase::AwaitingPrimary;

        let mut conversation_history = self.history.clone();
        conversation_history.push(HistoryEntry::new(
            Role::System,
            format!("Current time: {}", format_est(now_ms)),
        ));
        conversation_history.push(HistoryEntry::new(Role::User, message));

        Some(ChatRequest {
            message: message.to_owned(),
            conversation_history,
        })
    }

    /// Apply the primary `/chat` response.
    ///
    /// The server-returned history replaces the local copy unconditionally.
    /// Without a tool call the reply is appended and the turn ends; with one
    /// the interim "searching" entry is appended and the returned request
    /// must be sent to `/tool-call-result`.
    pub fn apply_primary(&mut self, resp: &ChatResponse, now_ms: f64) -> PrimaryOutcome {
        self.history = resp.conversation_history.clone();

        if resp.tool_call_detected {
            self.transcript
                .push(TranscriptEntry::new(Sender::Bot, SEARCHING_TEXT, now_ms));
            self.phase = TurnPhase::AwaitingToolCall;
            PrimaryOutcome::ToolCallPending(ToolCallRequest {
                conversation_history: self.history.clone(),
            })
        } else {
            self.transcript.push(TranscriptEntry::new(
                Sender::Bot,
                resp.chat_response.clone(),
                now_ms,
            ));
            self.phase = TurnPhase::Idle;
            PrimaryOutcome::Complete
        }
    }

    /// Apply the `/tool-call-result` response, completing the turn.
    pub fn apply_tool_result(&mut self, resp: &ToolCallResponse, now_ms: f64) {
        self.history = resp.final_conversation_history.clone();
        self.transcript.push(TranscriptEntry::new(
            Sender::Bot,
            resp.final_response.clone(),
            now_ms,
        ));
        self.phase = TurnPhase::Idle;
    }

    /// End the turn after a failed network call.
    ///
    /// History is left exactly as it was before the failed call; a failed
    /// tool-call resolution is not retried and the user must re-prompt.
    pub fn fail_turn(&mut self, now_ms: f64) {
        self.transcript
            .push(TranscriptEntry::new(Sender::Bot, ERROR_TEXT, now_ms));
        self.phase = TurnPhase::Idle;
    }
}
