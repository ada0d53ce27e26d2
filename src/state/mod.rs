//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `summary`, `analytics`, `inventory`)
//! so individual components can depend on small focused models. Everything
//! here is plain data with synchronous transitions; Leptos signals wrap
//! these structs at the component layer.

pub mod analytics;
pub mod chat;
pub mod inventory;
pub mod summary;
