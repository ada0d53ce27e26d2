//! Network layer: typed wire contracts, the HTTP client, and the async
//! turn driver.

pub mod api;
pub mod turn;
pub mod types;
