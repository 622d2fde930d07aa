//! Principal extraction settings.

use serde::Deserialize;

/// Where the gateway reads the authenticated principal bundle from.
///
/// The fronting authenticator is trusted to set these headers and to strip
/// them from inbound client traffic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Whether principal extraction runs at all. With extraction disabled
    /// every gateway request is denied, so the loader rejects it.
    pub enabled: bool,
    /// Header carrying the authenticated principal. The first value wins.
    pub primary_header: String,
    /// Header carrying impersonated principals under delegated access.
    /// May repeat; the first value wins.
    pub impersonation_header: String,
    /// Header carrying group principals. May repeat; each value is a
    /// comma-separated list.
    pub groups_header: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_header: "x-warden-user".to_string(),
            impersonation_header: "x-warden-doas".to_string(),
            groups_header: "x-warden-groups".to_string(),
        }
    }
}
