//! HTTP surface for the engagement endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::EngagementHandlers;
pub use routes::engagement_routes;
