use std::collections::BTreeSet;

use crate::Identity;

/// The authenticated principal bundle attached to a request by the
/// identity extraction layer.
///
/// Each principal kind has its own field rather than living in one
/// heterogeneous principal collection, so consumers never filter by kind
/// at the use site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    /// The authenticated principal, when authentication produced one.
    pub primary: Option<String>,
    /// Impersonated principals under delegated access, in arrival order.
    pub impersonations: Vec<String>,
    /// Group principals, deduplicated.
    pub groups: BTreeSet<String>,
}

impl SecurityContext {
    /// Resolves the caller identity for this request.
    ///
    /// Returns `None` when the bundle carries no primary principal; the
    /// authorization gate treats that as a denial rather than an error.
    /// Resolution only reads the bundle, so resolving twice from the same
    /// context yields the same identity.
    pub fn resolve(&self) -> Option<Identity> {
        let primary_user = self.primary.clone()?;

        Some(Identity {
            primary_user,
            impersonated_user: self.impersonations.first().cloned(),
            groups: self.groups.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_primary_principal() {
        let context = SecurityContext {
            primary: Some("bob".to_string()),
            impersonations: Vec::new(),
            groups: groups(&["analysts"]),
        };

        let identity = context.resolve().unwrap();

        assert_eq!(identity.primary_user, "bob");
        assert_eq!(identity.impersonated_user, None);
        assert_eq!(identity.effective_user(), "bob");
        assert_eq!(identity.groups, groups(&["analysts"]));
    }

    #[test]
    fn first_impersonation_wins() {
        let context = SecurityContext {
            primary: Some("svc-knox".to_string()),
            impersonations: vec!["alice".to_string(), "mallory".to_string()],
            groups: BTreeSet::new(),
        };

        let identity = context.resolve().unwrap();

        assert_eq!(identity.impersonated_user.as_deref(), Some("alice"));
        assert_eq!(identity.effective_user(), "alice");
    }

    #[test]
    fn missing_primary_principal_does_not_resolve() {
        let context = SecurityContext {
            primary: None,
            impersonations: vec!["alice".to_string()],
            groups: groups(&["analysts"]),
        };

        assert_eq!(context.resolve(), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let context = SecurityContext {
            primary: Some("svc-knox".to_string()),
            impersonations: vec!["alice".to_string()],
            groups: groups(&["analysts", "admins"]),
        };

        assert_eq!(context.resolve(), context.resolve());
    }
}
