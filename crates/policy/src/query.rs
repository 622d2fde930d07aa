use std::collections::BTreeSet;

use serde::Serialize;

/// A single authorization question posed to the decision service.
///
/// Optional fields serialize as absent rather than as empty strings, so
/// the service can tell "unknown" apart from "empty". One query is built
/// per request and consumed once.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccessQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<String>,
    /// The effective user the query is evaluated for.
    pub user: String,
    pub groups: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

impl AccessQuery {
    /// Starts a builder for the given effective user. Everything else is
    /// optional context; the setters take the optional values as they are
    /// so absent context flows through untouched.
    pub fn builder(user: impl Into<String>) -> AccessQueryBuilder {
        AccessQueryBuilder {
            service: None,
            topology: None,
            user: user.into(),
            groups: BTreeSet::new(),
            client_ip: None,
            cluster: None,
        }
    }
}

#[derive(Debug)]
pub struct AccessQueryBuilder {
    service: Option<String>,
    topology: Option<String>,
    user: String,
    groups: BTreeSet<String>,
    client_ip: Option<String>,
    cluster: Option<String>,
}

impl AccessQueryBuilder {
    pub fn service(mut self, service: Option<String>) -> Self {
        self.service = service;
        self
    }

    pub fn topology(mut self, topology: Option<String>) -> Self {
        self.topology = topology;
        self
    }

    pub fn groups(mut self, groups: BTreeSet<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn client_ip(mut self, client_ip: Option<String>) -> Self {
        self.client_ip = client_ip;
        self
    }

    pub fn cluster(mut self, cluster: Option<String>) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn build(self) -> AccessQuery {
        AccessQuery {
            service: self.service,
            topology: self.topology,
            user: self.user,
            groups: self.groups,
            client_ip: self.client_ip,
            cluster: self.cluster,
        }
    }
}
