use std::collections::BTreeSet;

/// The caller identity resolved for a single request.
///
/// Built fresh from the request's [`SecurityContext`](crate::SecurityContext)
/// and discarded with it; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The authenticated principal.
    pub primary_user: String,
    /// Present only under delegated access.
    pub impersonated_user: Option<String>,
    /// Group memberships. May be empty.
    pub groups: BTreeSet<String>,
}

impl Identity {
    /// The identity authorization is evaluated against: the impersonated
    /// user when delegation is active, otherwise the authenticated
    /// principal. A service account acting on behalf of an end user is
    /// authorized as that end user, not as itself.
    pub fn effective_user(&self) -> &str {
        self.impersonated_user.as_deref().unwrap_or(&self.primary_user)
    }
}
