//! The authorization gate in front of the gateway routes.
//!
//! Every request is attributed to an effective user, turned into an
//! access query, and posed to the policy decision service. Only an
//! explicit allow forwards the request; a missing verdict, a deny, an
//! evaluation failure, or an uninitialized engine all answer 403.

use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::body::Body;
use config::ClientIpConfig;
use context::SecurityContext;
use http::{Request, Response, StatusCode};
use policy::{AccessQuery, EngineCell};
use tower::Layer;

use crate::{client_ip, topology};

#[derive(Clone)]
pub(crate) struct AuthzLayer(Arc<AuthzLayerInner>);

struct AuthzLayerInner {
    resource_role: Option<String>,
    client_ip: ClientIpConfig,
    engine: Arc<EngineCell>,
}

impl AuthzLayer {
    pub(crate) fn new(
        resource_role: Option<String>,
        client_ip: ClientIpConfig,
        engine: Arc<EngineCell>,
    ) -> Self {
        Self(Arc::new(AuthzLayerInner {
            resource_role,
            client_ip,
            engine,
        }))
    }
}

impl<Service> Layer<Service> for AuthzLayer
where
    Service: Send + Clone,
{
    type Service = AuthzService<Service>;

    fn layer(&self, next: Service) -> Self::Service {
        AuthzService {
            next,
            layer: self.0.clone(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AuthzService<Service> {
    next: Service,
    layer: Arc<AuthzLayerInner>,
}

impl<Service, ReqBody> tower::Service<Request<ReqBody>> for AuthzService<Service>
where
    Service: tower::Service<Request<ReqBody>, Response = Response<Body>> + Send + Clone + 'static,
    Service::Future: Send,
    Service::Error: Display + 'static,
    ReqBody: http_body::Body + Send + 'static,
{
    type Response = http::Response<Body>;
    type Error = Service::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.next.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let mut next = self.next.clone();
        let layer = self.layer.clone();

        Box::pin(async move {
            let identity = req
                .extensions()
                .get::<SecurityContext>()
                .and_then(SecurityContext::resolve);

            let Some(identity) = identity else {
                log::warn!("Denying a request with no authenticated primary principal");
                return Ok(forbidden());
            };

            let topology = topology::topology_name(Some(req.uri().path())).map(str::to_owned);
            let client_ip = client_ip::extract(&layer.client_ip, &req);

            log::debug!(
                "Checking access primary_user: {}, impersonated_user: {:?}, effective_user: {}, groups: {:?}, topology: {:?}, client_ip: {:?}",
                identity.primary_user,
                identity.impersonated_user,
                identity.effective_user(),
                identity.groups,
                topology,
                client_ip,
            );

            let engine = layer.engine.get();

            let query = AccessQuery::builder(identity.effective_user())
                .service(layer.resource_role.clone())
                .topology(topology)
                .groups(identity.groups.clone())
                .client_ip(client_ip.map(|ip| ip.to_string()))
                .cluster(engine.and_then(|engine| engine.cluster_name()).map(str::to_owned))
                .build();

            let allowed = match engine {
                Some(engine) => match engine.evaluate(&query).await {
                    Ok(Some(decision)) => {
                        if let Some(detail) = &decision.detail {
                            log::debug!("Decision detail: {detail}");
                        }

                        decision.allowed
                    }
                    Ok(None) => {
                        log::debug!("No applicable decision for user {}", query.user);
                        false
                    }
                    Err(err) => {
                        log::warn!("Policy evaluation failed: {err}");
                        false
                    }
                },
                None => {
                    log::warn!("Policy engine is not initialized; denying");
                    false
                }
            };

            log::debug!("Access allowed: {allowed}");

            if allowed {
                next.call(req).await
            } else {
                Ok(forbidden())
            }
        })
    }
}

/// The only response the gate produces on its own: a fixed status with no
/// policy detail in the body.
fn forbidden() -> Response<Body> {
    Response::builder()
        .status(StatusCode::FORBIDDEN)
        .body(Body::empty())
        .unwrap()
}
