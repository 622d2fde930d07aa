use config::PolicyEngineConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{AccessDecision, AccessQuery, PolicyError};

/// HTTP client for the decision service's evaluate call.
pub(crate) struct PolicyClient {
    http: reqwest::Client,
    evaluate_url: Url,
    credential: Option<SecretString>,
}

impl PolicyClient {
    pub(crate) fn new(
        config: &PolicyEngineConfig,
        credential: Option<SecretString>,
    ) -> Result<Self, PolicyError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(PolicyError::Client)?;

        let evaluate_url = config.url.join("v1/evaluate")?;

        Ok(Self {
            http,
            evaluate_url,
            credential,
        })
    }

    /// Poses one access query to the decision service.
    ///
    /// `Ok(None)` means the service had no applicable decision. That is
    /// not the same thing as a deny payload, but the gate rejects on
    /// both.
    pub(crate) async fn evaluate(
        &self,
        query: &AccessQuery,
    ) -> Result<Option<AccessDecision>, PolicyError> {
        let mut request = self.http.post(self.evaluate_url.clone()).json(query);

        if let Some(credential) = &self.credential {
            request = request.bearer_auth(credential.expose_secret());
        }

        let response = request.send().await.map_err(PolicyError::Transport)?;
        let status = response.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(PolicyError::Status(status));
        }

        let decision = response.json().await.map_err(PolicyError::Payload)?;

        Ok(Some(decision))
    }
}
