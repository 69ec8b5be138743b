//! Target resolution.
//!
//! Turns the original request path reported by the ingress controller into
//! the cluster-local URL of the backend service. The path is appended
//! verbatim: it is neither percent-decoded nor normalized, so whatever the
//! edge layer sends is exactly what the backend sees.

use crate::config::BackendIdentity;

/// DNS suffix of in-cluster services.
pub const CLUSTER_DOMAIN: &str = "svc.cluster.local";

/// Build the target URL for `original_uri`, or `None` when it is empty.
pub fn resolve(original_uri: &str, identity: &BackendIdentity) -> Option<String> {
    TargetResolver::new(identity.clone()).resolve(original_uri)
}

fn base_url(identity: &BackendIdentity) -> String {
    format!(
        "http://{}.{}.{}:{}",
        identity.service_name, identity.namespace, CLUSTER_DOMAIN, identity.service_port
    )
}

/// Resolver bound to one backend identity for the life of the process.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    identity: BackendIdentity,
    base: String,
}

impl TargetResolver {
    pub fn new(identity: BackendIdentity) -> Self {
        let base = base_url(&identity);
        Self { identity, base }
    }

    /// Build the target URL for `original_uri`, or `None` when it is empty.
    pub fn resolve(&self, original_uri: &str) -> Option<String> {
        tracing::debug!(original_path = %original_uri, "Resolving target");
        if original_uri.is_empty() {
            return None;
        }
        let mut url = String::with_capacity(self.base.len() + original_uri.len());
        url.push_str(&self.base);
        url.push_str(original_uri);
        Some(url)
    }

    pub fn identity(&self) -> &BackendIdentity {
        &self.identity
    }

    /// The target URL without any path, e.g. for startup logging.
    pub fn base_url(&self) -> &str {
        &self.base
    }
}
