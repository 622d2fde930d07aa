//! Client-side plumbing for the external policy decision service: the
//! access query posed for each request, the verdict the service returns,
//! and the once-initialized process-wide engine handle.

mod client;
mod credentials;
mod decision;
mod engine;
mod error;
mod query;

pub use decision::AccessDecision;
pub use engine::{EngineCell, PolicyEngine};
pub use error::PolicyError;
pub use query::{AccessQuery, AccessQueryBuilder};
