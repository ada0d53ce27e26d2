//! Collapsible conversation summary card shown above the transcript.
//!
//! Visibility is owned by `SummaryState`: the card renders nothing until the
//! delayed reveal fires, and the expand toggle is purely presentational.

use leptos::prelude::*;

use crate::state::summary::SummaryState;

#[component]
pub fn SummaryCard() -> impl IntoView {
    let summary = expect_context::<RwSignal<SummaryState>>();

    let on_toggle = move |_| summary.update(SummaryState::toggle_expanded);

    move || {
        let state = summary.get();
        if !state.visible {
            return None;
        }
        let payload = state.summary?;
        let expanded = state.expanded;

        let sentiment_class = format!("summary-card__sentiment--{}", payload.sentiment);
        let keywords = payload.keywords.clone();
        let notes = payload.insights.additional_notes.clone();
        let upsell = if payload.insights.upsell_opportunity { "Yes" } else { "No" };

        Some(view! {
            <div class="summary-card">
                <div class="summary-card__header" on:click=on_toggle>
                    <h3>"Conversation Summary"</h3>
                    <span class="summary-card__arrow" class:summary-card__arrow--expanded=expanded>
                        "v"
                    </span>
                </div>
                {expanded
                    .then(|| view! {
                        <div class="summary-card__content">
                            <div class="summary-card__section">
                                <h4>"Sentiment"</h4>
                                <p class=sentiment_class>{payload.sentiment.to_string()}</p>
                            </div>
                            <div class="summary-card__section">
                                <h4>"Keywords"</h4>
                                <div class="summary-card__keywords">
                                    {keywords
                                        .into_iter()
                                        .map(|kw| view! { <span class="summary-card__keyword">{kw}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                            <div class="summary-card__section">
                                <h4>"Summary"</h4>
                                <p>{payload.summary.clone()}</p>
                            </div>
                            <div class="summary-card__section">
                                <h4>"Recommended Department"</h4>
                                <p class="summary-card__department">{payload.department.clone()}</p>
                            </div>
                            <div class="summary-card__section">
                                <h4>"Additional Insights"</h4>
                                <ul>
                                    <li><strong>"Urgency: "</strong>{payload.insights.urgency.clone()}</li>
                                    <li><strong>"Upsell Opportunity: "</strong>{upsell}</li>
                                    <li>
                                        <strong>"Customer Interest: "</strong>
                                        {payload.insights.customer_interest.clone()}
                                    </li>
                                    {notes
                                        .map(|n| view! { <li><strong>"Notes: "</strong>{n}</li> })}
                                </ul>
                            </div>
                        </div>
                    })}
            </div>
        })
    }
}
