//! HTTP server configuration settings.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::{ClientIpConfig, IdentityConfig};

/// HTTP server configuration settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The socket address the server should listen on.
    pub listen_address: Option<SocketAddr>,
    /// TLS configuration for secure connections.
    pub tls: Option<TlsServerConfig>,
    /// Health endpoint configuration.
    pub health: HealthConfig,
    /// Where the authenticated principal bundle is read from.
    pub identity: IdentityConfig,
    /// Client IP extraction used for access queries.
    pub client_ip: ClientIpConfig,
}

/// TLS certificate and key locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsServerConfig {
    pub certificate: PathBuf,
    pub key: PathBuf,
}

/// Health endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health endpoint is served at all.
    pub enabled: bool,
    /// Path the health endpoint answers on. Not subject to authorization.
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/health".to_string(),
        }
    }
}
