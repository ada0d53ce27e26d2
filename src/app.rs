//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::ApiClient;
use crate::pages::{analytics::AnalyticsPage, chat::ChatPage, login::LoginPage};
use crate::state::{
    analytics::AnalyticsState, chat::ChatState, inventory::InventoryState, summary::SummaryState,
};
use crate::util::time::now_ms;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the explicitly constructed API
/// client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::new(now_ms()));
    let summary = RwSignal::new(SummaryState::default());
    let analytics = RwSignal::new(AnalyticsState::default());
    let inventory = RwSignal::new(InventoryState::default());

    provide_context(chat);
    provide_context(summary);
    provide_context(analytics);
    provide_context(inventory);
    provide_context(ApiClient::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/showroom-client.css"/>
        <Title text="Showroom Chat"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
