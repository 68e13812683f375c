use crate::domain::ports::SentimentScorer;
use crate::utils::error::{NegotiationError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    compound: f64,
}

/// Scores text through a remote service.
///
/// The service receives `{"text": "..."}` and answers `{"compound": <score>}`.
pub struct HttpSentimentScorer {
    client: Client,
    endpoint: String,
}

impl HttpSentimentScorer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NegotiationError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

fn unavailable(reason: impl Into<String>) -> NegotiationError {
    NegotiationError::SentimentServiceUnavailable {
        reason: reason.into(),
    }
}

#[async_trait]
impl SentimentScorer for HttpSentimentScorer {
    async fn score(&self, text: &str) -> Result<f64> {
        tracing::debug!("Making sentiment request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ScoreRequest { text })
            .send()
            .await
            .map_err(|e| unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Sentiment response status: {}", status);
        if !status.is_success() {
            return Err(unavailable(format!("service returned {}", status)));
        }

        let body: ScoreResponse = response
            .json()
            .await
            .map_err(|e| unavailable(format!("malformed response: {}", e)))?;

        if !body.compound.is_finite() || !(-1.0..=1.0).contains(&body.compound) {
            return Err(unavailable(format!(
                "score {} outside [-1, 1]",
                body.compound
            )));
        }

        Ok(body.compound)
    }
}
