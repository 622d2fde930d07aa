//! Principal extraction from trusted front-proxy headers.
//!
//! Stands in for the host authenticator: it turns the identity headers
//! into the [`SecurityContext`] request extension the authorization gate
//! consumes. The fronting authenticator is trusted to set these headers
//! and strip them from client traffic.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::task::{Context, Poll};

use config::IdentityConfig;
use context::SecurityContext;
use http::{HeaderMap, Request};
use tower::Layer;

#[derive(Clone)]
pub(crate) struct IdentityLayer(Arc<IdentityConfig>);

impl IdentityLayer {
    pub(crate) fn new(config: IdentityConfig) -> Self {
        Self(Arc::new(config))
    }
}

impl<Service> Layer<Service> for IdentityLayer {
    type Service = IdentityService<Service>;

    fn layer(&self, next: Service) -> Self::Service {
        IdentityService {
            next,
            config: self.0.clone(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct IdentityService<Service> {
    next: Service,
    config: Arc<IdentityConfig>,
}

impl<Service, ReqBody> tower::Service<Request<ReqBody>> for IdentityService<Service>
where
    Service: tower::Service<Request<ReqBody>>,
{
    type Response = Service::Response;
    type Error = Service::Error;
    type Future = Service::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.next.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        if self.config.enabled {
            let context = security_context(&self.config, req.headers());
            req.extensions_mut().insert(context);
        }

        self.next.call(req)
    }
}

fn security_context(config: &IdentityConfig, headers: &HeaderMap) -> SecurityContext {
    let primary = headers
        .get(config.primary_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    let impersonations: Vec<String> = headers
        .get_all(config.impersonation_header.as_str())
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();

    let groups: BTreeSet<String> = headers
        .get_all(config.groups_header.as_str())
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();

    SecurityContext {
        primary,
        impersonations,
        groups,
    }
}
