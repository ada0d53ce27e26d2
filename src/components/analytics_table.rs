//! Per-request analytics table; clicking a row opens the call-log
//! drill-down for requests that carry a stored log id.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::CallLogRecord;
use crate::state::analytics::AnalyticsState;

fn open_log(analytics: RwSignal<AnalyticsState>, client: &ApiClient, log_id: i64) {
    let client = client.clone();
    leptos::task::spawn_local(async move {
        let path = format!("/analytics/openai-log/{log_id}");
        match client.get_json::<CallLogRecord>(&path).await {
            Ok(record) => analytics.update(|a| a.selected_log = Some(record)),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to fetch call log {log_id}: {_err}");
            }
        }
    });
}

#[component]
pub fn AnalyticsTable() -> impl IntoView {
    let analytics = expect_context::<RwSignal<AnalyticsState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    view! {
        <table class="analytics-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Model"</th>
                    <th>"Sent"</th>
                    <th>"Received"</th>
                    <th>"Total"</th>
                    <th>"Cost"</th>
                    <th>"Latency"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    analytics
                        .get()
                        .data
                        .requests_by_date
                        .iter()
                        .map(|req| {
                            let log_id = req.log_id;
                            let on_click = move |_| {
                                if let Some(id) = log_id {
                                    open_log(analytics, &client.get_value(), id);
                                }
                            };
                            view! {
                                <tr
                                    class="analytics-table__row"
                                    class:analytics-table__row--linked=log_id.is_some()
                                    on:click=on_click
                                >
                                    <td>{req.date.clone()}</td>
                                    <td>{req.model.clone()}</td>
                                    <td>{req.sent_tokens}</td>
                                    <td>{req.received_tokens}</td>
                                    <td>{req.total_tokens()}</td>
                                    <td>{format!("${:.4}", req.cost)}</td>
                                    <td>{format!("{:.0}ms", req.latency_ms)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
