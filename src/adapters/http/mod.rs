//! HTTP adapters - REST API implementation.

pub mod dto;
mod routes;

pub use routes::{api_routes, AppState};
