//! Outbound callback adapters.

mod http_dispatcher;

pub use http_dispatcher::HttpReportDispatcher;
