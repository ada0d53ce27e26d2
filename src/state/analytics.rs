//! State for the analytics page: the current snapshot plus fetch/reset
//! view flags and the call-log drill-down selection.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use crate::net::types::{AnalyticsSnapshot, CallLogRecord};

#[derive(Clone, Debug, Default)]
pub struct AnalyticsState {
    pub data: AnalyticsSnapshot,
    pub fetching: bool,
    pub error: Option<String>,
    pub show_reset_confirm: bool,
    pub selected_log: Option<CallLogRecord>,
}

impl AnalyticsState {
    /// Replace the displayed snapshot with a fresh one from the server.
    pub fn apply_snapshot(&mut self, snapshot: AnalyticsSnapshot) {
        self.data = snapshot;
        self.error = None;
    }

    /// Zero everything immediately, before the reset request completes.
    /// The server's actual response overwrites this via `apply_snapshot`.
    pub fn reset_optimistic(&mut self) {
        self.data = AnalyticsSnapshot::default();
        self.show_reset_confirm = false;
    }
}
