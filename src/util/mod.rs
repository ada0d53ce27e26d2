//! Small browser-facing utilities.

pub mod session;
pub mod time;
