use serde::Deserialize;
use serde_json::Value;

/// Verdict returned by the decision service for one access query.
///
/// A missing verdict (the service answering with no content) is modeled
/// as the absence of a decision, not as `allowed: false`; the gate denies
/// on both.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessDecision {
    pub allowed: bool,
    /// Opaque diagnostic detail from the service. Logged at debug level,
    /// never exposed to the caller of the gateway.
    #[serde(default)]
    pub detail: Option<Value>,
}
