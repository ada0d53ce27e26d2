//! Post-turn summary payload and its delayed-reveal view state.
//!
//! The reveal delay is driven by an epoch counter instead of timer handles:
//! `set_summary` bumps the epoch and the scheduled callback passes the epoch
//! it was armed with back into [`SummaryState::reveal`]. A superseding
//! summary (or a torn-down view) leaves the stale callback as a no-op, so
//! there are never stacked timers and never a flash of an overwritten
//! payload.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::net::types::Summary;

/// State for the conversation summary card above the transcript.
#[derive(Clone, Debug, Default)]
pub struct SummaryState {
    pub summary: Option<Summary>,
    pub visible: bool,
    pub expanded: bool,
    epoch: u64,
}

impl SummaryState {
    /// Delay between receiving a summary and revealing it.
    pub const REVEAL_DELAY_MS: u32 = 2000;

    /// Replace the current summary and hide it until the reveal fires.
    ///
    /// Returns the epoch the caller must arm its reveal timer with.
    pub fn set_summary(&mut self, summary: Summary) -> u64 {
        self.summary = Some(summary);
        self.visible = false;
        self.epoch += 1;
        self.epoch
    }

    /// Make the summary visible, unless `epoch` is stale (a newer summary
    /// arrived after this reveal was armed).
    pub fn reveal(&mut self, epoch: u64) {
        if epoch == self.epoch && self.summary.is_some() {
            self.visible = true;
        }
    }

    /// Flip the expand/collapse presentation state. Does not touch the
    /// payload or any pending reveal.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
