//! # showroom-client
//!
//! Leptos + WASM front end for the dealership conversational assistant.
//! Renders the chat UI, drives the two-phase turn protocol against the
//! completion backend (direct replies and tool-call round-trips), and hosts
//! the analytics and inventory views.
//!
//! The turn orchestration lives in `state::chat` (pure transitions) and
//! `net::turn` (async sequencing); everything else is presentation and glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
