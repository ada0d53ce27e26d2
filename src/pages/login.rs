//! Login boundary the transport client redirects to after a 401.
//!
//! Stores the entered access token (and a generated session id) into
//! localStorage, then returns to the chat.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = token.get();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        session::store(value, &uuid::Uuid::new_v4().to_string());
        navigate("/", Default::default());
    };

    view! {
        <div class="login-page">
            <h1>"Showroom Chat"</h1>
            <p>"Your session has expired. Enter an access token to continue."</p>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="password"
                    placeholder="Access token"
                    prop:value=move || token.get()
                    on:input=move |ev| token.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
