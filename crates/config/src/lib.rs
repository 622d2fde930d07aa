mod client_ip;
mod error;
mod gateway;
mod identity;
mod loader;
mod policy_engine;
mod server;

use std::path::Path;

use serde::Deserialize;

pub use client_ip::ClientIpConfig;
pub use error::Error;
pub use gateway::{GatewayConfig, TopologyConfig};
pub use identity::IdentityConfig;
pub use policy_engine::PolicyEngineConfig;
pub use server::{HealthConfig, ServerConfig, TlsServerConfig};

pub(crate) type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    pub policy_engine: PolicyEngineConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Config> {
        loader::load(path)
    }
}
