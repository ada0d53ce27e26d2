//! Chat panel: transcript, typing indicator, and the message input.
//!
//! This is where the pure turn state machine meets the browser: submissions
//! spawn `run_turn` with a signal-backed [`TurnOutput`], and a shared stop
//! flag set in `on_cleanup` keeps late responses and late reveal timers from
//! touching a torn-down view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::turn::{TurnOutput, run_turn};
use crate::net::types::{AnalyticsSnapshot, Summary};
use crate::state::analytics::AnalyticsState;
use crate::state::chat::{ChatState, Sender};
use crate::state::summary::SummaryState;
use crate::util::time::{format_clock, now_ms};

/// Turn sink writing into the page's signals, guarded by the stop flag.
#[derive(Clone)]
struct SignalSink {
    chat: RwSignal<ChatState>,
    summary: RwSignal<SummaryState>,
    analytics: RwSignal<AnalyticsState>,
    stopped: Arc<AtomicBool>,
}

impl TurnOutput for SignalSink {
    fn update_chat<F: FnOnce(&mut ChatState)>(&self, f: F) {
        if self.stopped.load(Ordering::Relaxed) {
            return;
        }
        self.chat.update(f);
    }

    fn summary_received(&self, payload: Summary) {
        if self.stopped.load(Ordering::Relaxed) {
            return;
        }
        let mut epoch = 0;
        self.summary.update(|s| epoch = s.set_summary(payload));
        schedule_reveal(self.summary, epoch, self.stopped.clone());
    }

    fn analytics_received(&self, snapshot: AnalyticsSnapshot) {
        if self.stopped.load(Ordering::Relaxed) {
            return;
        }
        self.analytics.update(|a| a.apply_snapshot(snapshot));
    }
}

/// Arm the delayed summary reveal. The epoch check inside `reveal` makes a
/// superseded timer a no-op, and the stop flag covers teardown.
fn schedule_reveal(summary: RwSignal<SummaryState>, epoch: u64, stopped: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SummaryState::REVEAL_DELAY_MS).await;
            if !stopped.load(Ordering::Relaxed) {
                summary.update(|s| s.reveal(epoch));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (summary, epoch, stopped);
    }
}

/// Transcript plus input for one chat session.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let summary = expect_context::<RwSignal<SummaryState>>();
    let analytics = expect_context::<RwSignal<AnalyticsState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let input = RwSignal::new(String::new());
    let stopped = StoredValue::new(Arc::new(AtomicBool::new(false)));
    on_cleanup(move || stopped.get_value().store(true, Ordering::Relaxed));

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().transcript.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.get().busy() {
            return;
        }
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());

        let sink = SignalSink {
            chat,
            summary,
            analytics,
            stopped: stopped.get_value(),
        };
        let client = client.get_value();
        leptos::task::spawn_local(async move {
            run_turn(&client, &sink, &text, now_ms).await;
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let busy = move || chat.get().busy();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .transcript
                        .iter()
                        .map(|entry| {
                            let is_bot = entry.sender == Sender::Bot;
                            let text = entry.text.clone();
                            let stamp = format_clock(entry.timestamp_ms);
                            view! {
                                <div class="chat-panel__message" class:chat-panel__message--bot=is_bot>
                                    <div class="chat-panel__content">{text}</div>
                                    <span class="chat-panel__timestamp">{stamp}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    busy()
                        .then(|| view! { <div class="chat-panel__typing">"Thinking..."</div> })
                }}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    prop:disabled=busy
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" prop:disabled=busy on:click=on_click>
                    {move || if busy() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
