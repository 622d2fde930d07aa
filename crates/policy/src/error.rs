#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid decision service endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("Failed to construct the decision service client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Decision service call failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Decision service returned {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed decision payload: {0}")]
    Payload(#[source] reqwest::Error),
}
