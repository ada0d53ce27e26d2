//! Leptos view components.

pub mod analytics_summary;
pub mod analytics_table;
pub mod chat_panel;
pub mod inventory_modal;
pub mod log_modal;
pub mod summary_card;
