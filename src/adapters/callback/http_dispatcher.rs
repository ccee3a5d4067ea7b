//! HTTP implementation of the report dispatcher.
//!
//! POSTs the final report as JSON to the configured evaluation endpoint
//! with a bounded timeout, classifying failures into timeout, connection,
//! and non-success status for logging.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::CallbackConfig;
use crate::ports::{DispatchError, FinalReport, ReportDispatcher};

/// Dispatches final reports over HTTP.
pub struct HttpReportDispatcher {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpReportDispatcher {
    /// Creates a dispatcher for the given endpoint and timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Creates a dispatcher from the callback configuration.
    pub fn from_config(config: &CallbackConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    fn classify(&self, err: reqwest::Error) -> DispatchError {
        if err.is_timeout() {
            DispatchError::Timeout(self.timeout)
        } else {
            DispatchError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl ReportDispatcher for HttpReportDispatcher {
    async fn dispatch(&self, report: &FinalReport) -> Result<(), DispatchError> {
        tracing::info!(session_id = %report.session_id, endpoint = %self.endpoint, "sending final report");

        let response = self
            .client
            .post(&self.endpoint)
            .json(report)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(session_id = %report.session_id, "final report accepted");
            Ok(())
        } else {
            Err(DispatchError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engagement::EngagementSession;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_report() -> FinalReport {
        let session = EngagementSession::new("wa-7");
        FinalReport::from_session(&session, "summary".to_string())
    }

    fn dispatcher_for(server: &MockServer, timeout: Duration) -> HttpReportDispatcher {
        HttpReportDispatcher::new(format!("{}/callback", server.uri()), timeout)
    }

    #[tokio::test]
    async fn successful_post_returns_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/callback"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server, Duration::from_secs(5));
        assert!(dispatcher.dispatch(&sample_report()).await.is_ok());
    }

    #[tokio::test]
    async fn posts_camel_case_report_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/callback"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server, Duration::from_secs(5));
        dispatcher.dispatch(&sample_report()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["sessionId"], "wa-7");
        assert!(body["extractedIntelligence"]["bankAccounts"].is_array());
        assert_eq!(body["agentNotes"], "summary");
    }

    #[tokio::test]
    async fn non_success_status_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/callback"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server, Duration::from_secs(5));
        let result = dispatcher.dispatch(&sample_report()).await;
        assert_eq!(result, Err(DispatchError::Status(503)));
    }

    #[tokio::test]
    async fn slow_endpoint_is_classified_as_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/callback"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server, Duration::from_millis(50));
        let result = dispatcher.dispatch(&sample_report()).await;
        assert!(matches!(result, Err(DispatchError::Timeout(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_classified_as_connection_failure() {
        // Nothing listens on this port.
        let dispatcher =
            HttpReportDispatcher::new("http://127.0.0.1:1/callback", Duration::from_secs(1));
        let result = dispatcher.dispatch(&sample_report()).await;
        assert!(matches!(result, Err(DispatchError::Connection(_))));
    }
}
