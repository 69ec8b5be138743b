//! Configuration schema definitions.
//!
//! Every section has defaults so an empty file (or no file at all) yields a
//! runnable configuration. The backend defaults mirror the historical flag
//! defaults of the default backend.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the default backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Where the proxy listens.
    pub listener: ListenerConfig,

    /// The single service every routed request is forwarded to.
    pub backend: BackendIdentity,

    /// How the backend is contacted.
    pub upstream: UpstreamConfig,

    /// Static page served when no target can be derived.
    pub not_found: NotFoundConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (all interfaces by default).
    pub host: IpAddr,

    /// Listen port.
    pub port: u16,
}

impl ListenerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

/// Identity of the in-cluster service that receives proxied requests.
///
/// Fixed at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendIdentity {
    /// Kubernetes namespace of the service.
    pub namespace: String,

    /// Service name.
    pub service_name: String,

    /// Service port, kept verbatim as it appears in the target URL.
    pub service_port: String,
}

impl Default for BackendIdentity {
    fn default() -> Self {
        Self {
            namespace: "namespace".to_string(),
            service_name: "service-name".to_string(),
            service_port: "8080".to_string(),
        }
    }
}

/// Upstream (backend) connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// External hostname presented to the backend in the `Host` header.
    pub host: String,

    /// Connect to this address instead of resolving the cluster DNS name.
    pub connect_to: Option<SocketAddr>,

    /// Upper bound on waiting for the backend's response head. Unset means
    /// no limit.
    pub timeout_secs: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            host: "host".to_string(),
            connect_to: None,
            timeout_secs: None,
        }
    }
}

/// Not-found page settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NotFoundConfig {
    /// Path of the HTML page, read on every miss.
    pub page: PathBuf,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            page: PathBuf::from("./assets/404.html"),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log output format.
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_flag_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.backend.service_name, "service-name");
        assert_eq!(config.backend.namespace, "namespace");
        assert_eq!(config.backend.service_port, "8080");
        assert_eq!(config.upstream.host, "host");
        assert_eq!(config.upstream.timeout(), None);
        assert_eq!(config.not_found.page, PathBuf::from("./assets/404.html"));
        assert_eq!(config.listener.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
