use std::sync::Arc;

use config::PolicyEngineConfig;
use tokio::sync::OnceCell;

use crate::client::PolicyClient;
use crate::{AccessDecision, AccessQuery, PolicyError, credentials};

/// Handle to the external policy decision service.
///
/// Constructed at most once per process through [`EngineCell`] and shared
/// read-only by every request thereafter.
pub struct PolicyEngine {
    cluster_name: Option<String>,
    client: PolicyClient,
}

impl PolicyEngine {
    /// Builds the handle: best-effort credential bootstrap followed by
    /// client construction. A failed bootstrap is logged and skipped, the
    /// engine still starts; a later evaluation failure is what surfaces a
    /// broken credential.
    pub fn new(config: &PolicyEngineConfig) -> Result<Self, PolicyError> {
        let credential = config.credentials_file.as_deref().and_then(|path| {
            match credentials::load(path) {
                Ok(credential) => Some(credential),
                Err(err) => {
                    log::error!(
                        "Failed to load the decision service credential from {}: {err}",
                        path.display()
                    );
                    None
                }
            }
        });

        let client = PolicyClient::new(config, credential)?;

        Ok(Self {
            cluster_name: config.cluster_name.clone(),
            client,
        })
    }

    /// Cluster name attached to access queries, when configured.
    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster_name.as_deref()
    }

    /// Evaluates one access query against the decision service.
    pub async fn evaluate(
        &self,
        query: &AccessQuery,
    ) -> Result<Option<AccessDecision>, PolicyError> {
        self.client.evaluate(query).await
    }
}

/// Process-scoped cell holding the shared engine handle.
///
/// The cell is injected where it is needed instead of living in a global.
/// `get_or_init` constructs the engine at most once while racing callers
/// wait for the winner; `get` is the unsynchronized fast path taken on
/// every request.
#[derive(Default)]
pub struct EngineCell {
    cell: OnceCell<Arc<PolicyEngine>>,
}

impl EngineCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `init` unless a previous call already produced an engine.
    ///
    /// Callers racing a construction in progress block until it finishes
    /// and then observe the same fully-constructed handle. When
    /// construction fails the cell stays empty, the gate keeps denying,
    /// and a later call may retry.
    pub async fn get_or_init<F>(&self, init: F) -> Option<Arc<PolicyEngine>>
    where
        F: FnOnce() -> Result<PolicyEngine, PolicyError>,
    {
        let result = self
            .cell
            .get_or_try_init(|| async { init().map(Arc::new) })
            .await;

        match result {
            Ok(engine) => Some(engine.clone()),
            Err(err) => {
                log::error!("Failed to construct the policy engine handle: {err}");
                None
            }
        }
    }

    /// The engine handle, or `None` while no construction has completed.
    pub fn get(&self) -> Option<&Arc<PolicyEngine>> {
        self.cell.get()
    }
}
