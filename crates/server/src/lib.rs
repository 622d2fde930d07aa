mod authz;
mod client_ip;
mod error;
mod identity;
pub mod logger;
mod proxy;
mod topology;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use axum_server::tls_rustls::RustlsConfig;
use config::Config;
use policy::{EngineCell, PolicyEngine};
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use authz::AuthzLayer;
use identity::IdentityLayer;
use proxy::GatewayService;

pub use error::Error;

pub(crate) type Result<T> = std::result::Result<T, error::Error>;

pub struct ServeConfig {
    pub listen_address: SocketAddr,
    pub config: Config,
}

/// Builds the gateway router: the health endpoint outside the gate, and
/// everything else behind principal extraction and authorization.
pub fn router(config: &Config, engine: Arc<EngineCell>) -> Result<Router> {
    let gateway = GatewayService::new(&config.gateway)?;

    let protected = ServiceBuilder::new()
        .layer(IdentityLayer::new(config.server.identity.clone()))
        .layer(AuthzLayer::new(
            config.gateway.resource_role.clone(),
            config.server.client_ip.clone(),
            engine,
        ))
        .service(gateway);

    let mut app = Router::new();

    if config.server.health.enabled {
        app = app.route(&config.server.health.path, get(health));
    }

    Ok(app.fallback_service(protected))
}

pub async fn serve(ServeConfig { listen_address, config }: ServeConfig) -> Result<()> {
    let engine = Arc::new(EngineCell::new());

    let initialized = engine
        .get_or_init(|| PolicyEngine::new(&config.policy_engine))
        .await;

    if initialized.is_none() {
        log::error!("Policy engine unavailable; every gateway request will be denied");
    }

    let app = router(&config, engine)?;

    let listener = TcpListener::bind(listen_address)
        .await
        .map_err(error::Error::Bind)?;

    match &config.server.tls {
        Some(tls) => {
            let rustls_config = RustlsConfig::from_pem_file(&tls.certificate, &tls.key)
                .await
                .map_err(|e| error::Error::Tls(e.to_string()))?;

            log::info!("Gateway listening at https://{listen_address}");

            let std_listener = listener.into_std().map_err(error::Error::Bind)?;

            axum_server::from_tcp_rustls(std_listener, rustls_config)
                .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                .await
                .map_err(|e| error::Error::Server(std::io::Error::other(e)))?;
        }
        None => {
            log::info!("Gateway listening at http://{listen_address}");

            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .map_err(error::Error::Server)?;
        }
    }

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}
