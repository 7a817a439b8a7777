//! Remote scoring collaborator — `POST <endpoint>` with the full aggregate.
//!
//! Failure classification drives the shell's messaging: a transport-level
//! failure (no connection, timeout) is a network error; any non-2xx response
//! is a server error. Both are retryable via `score_with_retry`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::ResumeData;
use crate::score::{ResumeScorer, ScoreReport};

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Serialize)]
struct ScoreRequest<'a> {
    resume: &'a ResumeData,
}

#[derive(Clone)]
pub struct RemoteScorer {
    client: Client,
    endpoint: String,
}

impl RemoteScorer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("failed to build HTTP client"),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ResumeScorer for RemoteScorer {
    async fn score(&self, resume: &ResumeData) -> Result<ScoreReport, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ScoreRequest { resume })
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Server {
                status: status.as_u16(),
            });
        }

        // A 2xx body that fails to deserialize is still the server's fault.
        let report: ScoreReport = match response.json().await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("score response body malformed: {err}");
                return Err(AppError::Server {
                    status: status.as_u16(),
                });
            }
        };

        debug!(score = report.score, "remote score received");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_wraps_resume_key() {
        let data = ResumeData::initial();
        let body = serde_json::to_value(ScoreRequest { resume: &data }).unwrap();
        assert!(body.get("resume").is_some());
        assert!(body["resume"].get("personalInfo").is_some());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Reserved TEST-NET address; the connection attempt fails at transport
        // level without touching any real service.
        let scorer = RemoteScorer::with_timeout("http://192.0.2.1:9/score", 1);
        let err = scorer.score(&ResumeData::initial()).await.unwrap_err();
        assert_eq!(err.code(), "NETWORK_ERROR");
    }
}
