//! Drill-down modal showing one stored backend-call log record.

use leptos::prelude::*;

use crate::state::analytics::AnalyticsState;

fn field(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|v| {
        view! {
            <div class="log-modal__field">
                <strong>{label}</strong>
                <pre>{v}</pre>
            </div>
        }
    })
}

/// Renders only while `AnalyticsState::selected_log` is set.
#[component]
pub fn LogModal() -> impl IntoView {
    let analytics = expect_context::<RwSignal<AnalyticsState>>();

    let on_close = move |_| analytics.update(|a| a.selected_log = None);

    move || {
        let log = analytics.get().selected_log?;
        let payload = log
            .request_payload
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok());
        let response = log
            .response_json
            .as_ref()
            .and_then(|v| serde_json::to_string_pretty(v).ok());

        Some(view! {
            <div class="log-modal__overlay">
                <div class="log-modal">
                    <div class="log-modal__header">
                        <h3>{format!("Request Log #{}", log.id)}</h3>
                        <button class="btn" on:click=on_close>
                            "Close"
                        </button>
                    </div>
                    <div class="log-modal__body">
                        {field("Status", log.status.clone())}
                        {field("User", log.user_id.clone())}
                        {field("Sent At", log.request_sent_at.clone())}
                        {field("Received At", log.response_received_at.clone())}
                        {field("Prompt", log.request_prompt.clone())}
                        {field("Request Payload", payload)}
                        {field("Response", response)}
                        {field("Error", log.error_message.clone())}
                    </div>
                </div>
            </div>
        })
    }
}
