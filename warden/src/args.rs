use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// A gateway that authorizes every request against a policy decision
/// service before forwarding it.
#[derive(Debug, Parser)]
#[command(name = "warden", version)]
pub(crate) struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "WARDEN_CONFIG", default_value = "warden.toml")]
    pub(crate) config: PathBuf,

    /// Log filter directives, e.g. "info" or "server=debug,policy=debug".
    #[arg(long, env = "WARDEN_LOG", default_value = "info")]
    pub(crate) log_filter: String,

    /// Address to listen on. Overrides the configuration file.
    #[arg(short, long, env = "WARDEN_LISTEN")]
    pub(crate) listen_address: Option<SocketAddr>,
}
