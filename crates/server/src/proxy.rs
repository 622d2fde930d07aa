//! Forwards allowed requests to the upstream behind their topology.

use std::{collections::BTreeMap, convert::Infallible, sync::Arc, task::Poll, time::Duration};

use axum::body::Body;
use axum::response::IntoResponse as _;
use config::GatewayConfig;
use futures::future::BoxFuture;
use http::{Request, Response, StatusCode};
use tower::Service;
use url::Url;

use crate::topology;

#[derive(Clone)]
pub(crate) struct GatewayService {
    shared: Arc<GatewayInner>,
}

struct GatewayInner {
    client: reqwest::Client,
    upstreams: BTreeMap<String, Url>,
}

impl GatewayService {
    pub(crate) fn new(config: &GatewayConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(5)))
            .tcp_nodelay(true)
            .build()
            .map_err(crate::error::Error::UpstreamClient)?;

        let upstreams = config
            .topologies
            .iter()
            .map(|(name, topology)| (name.clone(), topology.url.clone()))
            .collect();

        Ok(Self {
            shared: Arc::new(GatewayInner { client, upstreams }),
        })
    }
}

impl Service<Request<Body>> for GatewayService {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let shared = self.shared.clone();

        Box::pin(async move {
            let (parts, body) = request.into_parts();

            let Some(topology) = topology::topology_name(Some(parts.uri.path())) else {
                return Ok(status_only(StatusCode::NOT_FOUND));
            };

            let Some(base) = shared.upstreams.get(topology) else {
                log::debug!("No upstream configured for topology '{topology}'");
                return Ok(status_only(StatusCode::NOT_FOUND));
            };

            // Everything after the gateway prefix and the topology segment
            // is forwarded relative to the upstream base URL.
            let remainder = parts.uri.path().splitn(4, '/').nth(3).unwrap_or("");

            let mut url = match base.join(remainder) {
                Ok(url) => url,
                Err(err) => {
                    log::error!("Invalid upstream path for topology '{topology}': {err}");
                    return Ok(status_only(StatusCode::BAD_GATEWAY));
                }
            };

            url.set_query(parts.uri.query());

            let mut headers = parts.headers;
            headers.remove(http::header::HOST);
            // The body is re-streamed, so the original framing headers no
            // longer apply.
            headers.remove(http::header::CONTENT_LENGTH);
            headers.remove(http::header::TRANSFER_ENCODING);

            let result = shared
                .client
                .request(parts.method, url)
                .headers(headers)
                .body(reqwest::Body::wrap_stream(body.into_data_stream()))
                .send()
                .await;

            let response = match result {
                Ok(response) => http::Response::from(response).into_response(),
                Err(err) => {
                    log::error!("Failed to forward the request upstream: {err}");
                    status_only(StatusCode::BAD_GATEWAY)
                }
            };

            Ok(response)
        })
    }
}

fn status_only(status: StatusCode) -> Response<Body> {
    Response::builder().status(status).body(Body::empty()).unwrap()
}
