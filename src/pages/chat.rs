//! Main chat page: header actions, summary card, and the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::inventory_modal::InventoryModal;
use crate::components::summary_card::SummaryCard;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h2>"Showroom Chat"</h2>
                <div class="chat-page__actions">
                    <InventoryModal/>
                    <a class="btn" href="/analytics">
                        "View Analytics"
                    </a>
                </div>
            </header>
            <SummaryCard/>
            <ChatPanel/>
        </div>
    }
}
