//! Gateway routing and enforcement settings.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

/// Gateway routing and enforcement settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Service name reported to the decision service with every access
    /// query. Absent means the decision service sees no service field.
    pub resource_role: Option<String>,
    /// Upstream services addressable through the gateway, keyed by
    /// topology name. The topology is the second path segment of a
    /// gateway request: `/gateway/sales/...` targets `sales`.
    pub topologies: BTreeMap<String, TopologyConfig>,
}

/// A single topology and the upstream it forwards to.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyConfig {
    /// Base URL requests for this topology are forwarded to.
    pub url: Url,
}
