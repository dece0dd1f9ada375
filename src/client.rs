//! The single outbound call to the remote generation service.
//!
//! One authenticated `POST` with the prompt as JSON body, no retries, no
//! background work. The client is stateless — it never touches the result
//! store — and maps each way the round-trip can fail onto the
//! [`GenerationError`] taxonomy so the caller can tell "the network is down"
//! apart from "the service is unhappy" apart from "the service answered
//! garbage".

use crate::config::ServiceConfig;
use crate::error::GenerationError;
use crate::model::{GenerationRequest, GenerationResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the generation endpoint.
///
/// Cheap to clone-by-reference and safe to reuse: the underlying
/// `reqwest::Client` pools connections across submissions.
#[derive(Debug)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl GenerationClient {
    /// Build a client from connection settings.
    pub fn new(config: ServiceConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| GenerationError::Transport { source })?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Send `prompt` to the service and decode the 3-part result.
    ///
    /// The caller is trusted to withhold empty prompts; this method sends
    /// whatever it is given. The call is the session's one suspension point:
    /// it resolves with success, an HTTP error, or a transport error, and
    /// nothing else happens in the meantime.
    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        debug!("Submitting prompt ({} bytes) to {}", prompt.len(), self.config.endpoint);

        let request = GenerationRequest {
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.token)
            .json(&request)
            .send()
            .await
            .map_err(|source| {
                warn!("Generation request failed before a response: {source}");
                GenerationError::Transport { source }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Generation service returned HTTP {status}");
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| GenerationError::MalformedResponse {
                    detail: format!("body is not valid JSON: {e}"),
                })?;

        let result = GenerationResult::from_response_body(&body)?;
        debug!(
            "Generation succeeded ({} bytes of markdown)",
            result.documentation.markdown.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        let config = ServiceConfig::builder()
            .endpoint("http://127.0.0.1:1/generate")
            .token("t")
            .build();
        assert!(GenerationClient::new(config).is_ok());
    }
}
