//! Metric cards summarizing the current analytics snapshot.

use leptos::prelude::*;

use crate::state::analytics::AnalyticsState;

#[component]
fn MetricCard(title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="analytics-card">
            <span class="analytics-card__title">{title}</span>
            <span class="analytics-card__value">{move || value.get()}</span>
        </div>
    }
}

/// Cost, latency, and token totals for the whole recorded period.
#[component]
pub fn AnalyticsSummary() -> impl IntoView {
    let analytics = expect_context::<RwSignal<AnalyticsState>>();

    let data = move || analytics.get().data;

    view! {
        <div class="analytics-summary">
            <div class="analytics-summary__row">
                <MetricCard
                    title="Total Cost"
                    value=Signal::derive(move || format!("${:.4}", data().total_cost))
                />
                <MetricCard
                    title="Average Cost"
                    value=Signal::derive(move || {
                        format!("${:.4}/req", data().average_cost_per_request)
                    })
                />
                <MetricCard
                    title="Average Latency"
                    value=Signal::derive(move || format!("{:.0}ms", data().average_latency))
                />
            </div>
            <div class="analytics-summary__row">
                <MetricCard
                    title="Total Tokens"
                    value=Signal::derive(move || data().total_tokens().to_string())
                />
                <MetricCard
                    title="Sent Tokens"
                    value=Signal::derive(move || data().total_sent_tokens.to_string())
                />
                <MetricCard
                    title="Received Tokens"
                    value=Signal::derive(move || data().total_received_tokens.to_string())
                />
            </div>
        </div>
    }
}
