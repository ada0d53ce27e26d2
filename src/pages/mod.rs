//! Routed pages.

pub mod analytics;
pub mod chat;
pub mod login;
