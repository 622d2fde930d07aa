//! Decision service connection settings.

use std::path::PathBuf;
use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;
use url::Url;

/// Connection settings for the external policy decision service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyEngineConfig {
    /// Base URL of the decision service.
    pub url: Url,
    /// Cluster name attached to every access query.
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Upper bound on a single evaluation call. An evaluation that runs
    /// past it counts as a failed decision and the request is denied.
    #[serde(deserialize_with = "deserialize_duration", default = "default_timeout")]
    pub timeout: Duration,
    /// File holding the bearer credential presented to the decision
    /// service. Read once when the engine handle is constructed.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}
