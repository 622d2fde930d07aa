use std::net::{IpAddr, SocketAddr};

use axum::extract::ConnectInfo;
use config::ClientIpConfig;
use http::Request;

/// Resolves the client address reported in access queries.
///
/// Header extraction is config-gated; without a matching header the peer
/// address of the connection is used, and `None` only when even that is
/// unavailable.
pub(crate) fn extract<B>(config: &ClientIpConfig, req: &Request<B>) -> Option<IpAddr> {
    if config.x_real_ip
        && let Some(ip) = req
            .headers()
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    {
        return Some(ip);
    }

    if let Some(hops) = config.x_forwarded_for_trusted_hops
        && let Some(ip) = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').rev().nth(hops))
            .and_then(|s| s.trim().parse().ok())
    {
        return Some(ip);
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
}
