//! Scamlure service entry point.
//!
//! Loads and validates configuration, initializes tracing, wires the
//! adapters to the engagement core, and serves the HTTP API.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use scamlure::adapters::auth::StaticKeyValidator;
use scamlure::adapters::callback::HttpReportDispatcher;
use scamlure::adapters::http::{app_router, EngagementHandlers};
use scamlure::application::handlers::{
    AnalyzeMessageHandler, EngagementLimits, GetSessionHandler,
};
use scamlure::application::SessionRegistry;
use scamlure::config::AppConfig;
use scamlure::domain::detection::ScamScorer;
use scamlure::ports::ApiKeyValidator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let registry = Arc::new(SessionRegistry::new(config.detection.session_timeout()));
    let scorer = ScamScorer::new(config.detection.scam_score_threshold);
    let dispatcher = Arc::new(HttpReportDispatcher::from_config(&config.callback));

    let analyze_handler = Arc::new(AnalyzeMessageHandler::new(
        registry.clone(),
        scorer,
        dispatcher,
        EngagementLimits::from(&config.detection),
    ));
    let get_session_handler = Arc::new(GetSessionHandler::new(registry.clone()));
    let handlers = EngagementHandlers::new(analyze_handler, get_session_handler, registry);

    let validator: Arc<dyn ApiKeyValidator> =
        Arc::new(StaticKeyValidator::new(config.auth.api_key.clone()));

    let app = app_router(handlers, validator);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, callback = %config.callback.endpoint, "scamlure listening");

    axum::serve(listener, app).await?;
    Ok(())
}
