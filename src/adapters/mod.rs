//! Adapters - concrete implementations at the service's edges.

pub mod auth;
pub mod callback;
pub mod http;
