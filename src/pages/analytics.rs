//! Analytics page: summary cards, per-request table, manual refresh, and
//! the optimistic reset flow.

use leptos::prelude::*;

use crate::components::analytics_summary::AnalyticsSummary;
use crate::components::analytics_table::AnalyticsTable;
use crate::components::log_modal::LogModal;
use crate::net::api::ApiClient;
use crate::net::types::{AnalyticsSnapshot, ResetResponse};
use crate::state::analytics::AnalyticsState;

const FETCH_ERROR: &str = "Failed to load analytics data. Please try again later.";
const RESET_ERROR: &str = "Failed to reset analytics data. Please try again later.";

fn fetch_summary(analytics: RwSignal<AnalyticsState>, client: &ApiClient) {
    analytics.update(|a| a.fetching = true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        // Brief pause so a manual refresh visibly reads as activity.
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(1000).await;

        match client.get_json::<AnalyticsSnapshot>("/analytics/summary").await {
            Ok(snapshot) => analytics.update(|a| {
                a.apply_snapshot(snapshot);
                a.fetching = false;
            }),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to fetch analytics summary: {_err}");
                analytics.update(|a| {
                    a.error = Some(FETCH_ERROR.to_owned());
                    a.fetching = false;
                });
            }
        }
    });
}

/// Zero the displayed snapshot immediately, then let the server's actual
/// post-reset snapshot overwrite it when the request completes.
fn reset_analytics(analytics: RwSignal<AnalyticsState>, client: &ApiClient) {
    analytics.update(AnalyticsState::reset_optimistic);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        let body = serde_json::json!({});
        match client
            .post_json::<ResetResponse, _>("/analytics/reset", &body)
            .await
        {
            Ok(resp) => analytics.update(|a| a.apply_snapshot(resp.analytics)),
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to reset analytics: {_err}");
                analytics.update(|a| a.error = Some(RESET_ERROR.to_owned()));
            }
        }
    });
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let analytics = expect_context::<RwSignal<AnalyticsState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    // Initial fetch, once, client-side only (effects do not run during SSR).
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        fetch_summary(analytics, &client.get_value());
    });

    let on_fetch = move |_| fetch_summary(analytics, &client.get_value());
    let on_reset_request = move |_| analytics.update(|a| a.show_reset_confirm = true);
    let on_reset_cancel = move |_| analytics.update(|a| a.show_reset_confirm = false);
    let on_reset_confirm = move |_| reset_analytics(analytics, &client.get_value());

    let fetching = move || analytics.get().fetching;

    view! {
        <div class="analytics-page">
            <header class="analytics-page__header">
                <h2>"Model Performance Analytics"</h2>
                <div class="analytics-page__actions">
                    {move || {
                        fetching()
                            .then(|| view! { <span class="analytics-page__loading">"Loading..."</span> })
                    }}
                    <button class="btn" prop:disabled=fetching on:click=on_fetch>
                        {move || if fetching() { "Fetching..." } else { "Fetch Data" }}
                    </button>
                    <button class="btn btn--danger" on:click=on_reset_request>
                        "Reset Data"
                    </button>
                    <a class="btn" href="/">
                        "Back to Chat"
                    </a>
                </div>
            </header>

            {move || {
                analytics
                    .get()
                    .error
                    .map(|msg| view! { <div class="analytics-page__error">{msg}</div> })
            }}

            {move || {
                analytics
                    .get()
                    .show_reset_confirm
                    .then(|| view! {
                        <div class="confirm-dialog__overlay">
                            <div class="confirm-dialog">
                                <h3>"Reset Analytics Data"</h3>
                                <p>
                                    "Are you sure you want to reset all analytics data? \
                                     This action cannot be undone."
                                </p>
                                <div class="confirm-dialog__buttons">
                                    <button class="btn" on:click=on_reset_cancel>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--danger" on:click=on_reset_confirm>
                                        "Reset Data"
                                    </button>
                                </div>
                            </div>
                        </div>
                    })
            }}

            <AnalyticsSummary/>
            <AnalyticsTable/>
            <LogModal/>
        </div>
    }
}
