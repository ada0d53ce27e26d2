use super::*;
use crate::net::types::RequestRecord;

fn populated() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_cost: 1.25,
        total_requests: 10,
        average_cost_per_request: 0.125,
        total_sent_tokens: 5000,
        total_received_tokens: 2000,
        average_latency: 840.0,
        requests_by_date: vec![RequestRecord {
            date: "2025-01-15".to_owned(),
            model: "gpt-4o".to_owned(),
            sent_tokens: 500,
            received_tokens: 200,
            cost: 0.12,
            latency_ms: 900.0,
            log_id: Some(7),
        }],
        cost_by_model: [("gpt-4o".to_owned(), 1.25)].into_iter().collect(),
    }
}

#[test]
fn apply_snapshot_replaces_data_and_clears_error() {
    let mut state = AnalyticsState {
        error: Some("stale error".to_owned()),
        ..AnalyticsState::default()
    };

    state.apply_snapshot(populated());

    assert_eq!(state.data.total_requests, 10);
    assert_eq!(state.data.requests_by_date.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn optimistic_reset_zeroes_everything_immediately() {
    let mut state = AnalyticsState {
        data: populated(),
        show_reset_confirm: true,
        ..AnalyticsState::default()
    };

    state.reset_optimistic();

    assert_eq!(state.data, AnalyticsSnapshot::default());
    assert_eq!(state.data.total_cost, 0.0);
    assert!(state.data.requests_by_date.is_empty());
    assert!(!state.show_reset_confirm);
}

#[test]
fn server_snapshot_overwrites_optimistic_zero() {
    let mut state = AnalyticsState::default();
    state.reset_optimistic();

    // The reset endpoint answers with the authoritative (zeroed) snapshot;
    // whatever it returns wins over the optimistic value.
    let mut server = AnalyticsSnapshot::default();
    server.total_requests = 1;
    state.apply_snapshot(server);

    assert_eq!(state.data.total_requests, 1);
}

#[test]
fn snapshot_total_tokens_sums_sent_and_received() {
    assert_eq!(populated().total_tokens(), 7000);
    assert_eq!(populated().requests_by_date[0].total_tokens(), 700);
}
