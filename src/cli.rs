//! Command-line surface.
//!
//! Every option can also come from the environment. Precedence is
//! flag > environment > config file > built-in default.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::read_config;
use crate::config::{validate_config, ConfigError, LogFormat, ProxyConfig};

#[derive(Debug, Parser)]
#[command(name = "default-backend")]
#[command(about = "Default backend that proxies ingress misses to a single in-cluster service", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, env = "DEFAULT_BACKEND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port used to expose the default backend
    #[arg(long, env = "DEFAULT_BACKEND_PORT")]
    pub port: Option<u16>,

    /// Name of the service where requests are proxied
    #[arg(long, env = "DEFAULT_BACKEND_SERVICE")]
    pub service: Option<String>,

    /// Port the service is listening on
    #[arg(long = "service-port", env = "DEFAULT_BACKEND_SERVICE_PORT")]
    pub service_port: Option<String>,

    /// Namespace the service runs in
    #[arg(long, env = "DEFAULT_BACKEND_NAMESPACE")]
    pub namespace: Option<String>,

    /// Hostname presented to the service
    #[arg(long, env = "DEFAULT_BACKEND_HOST")]
    pub host: Option<String>,

    /// HTML page served when no target can be derived
    #[arg(long = "not-found-page", env = "DEFAULT_BACKEND_NOT_FOUND_PAGE")]
    pub not_found_page: Option<PathBuf>,

    /// Connect to this address instead of resolving the service name
    #[arg(long = "connect-to", env = "DEFAULT_BACKEND_CONNECT_TO")]
    pub connect_to: Option<SocketAddr>,

    /// Give up on the service after this many seconds
    #[arg(long = "upstream-timeout-secs", env = "DEFAULT_BACKEND_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,

    /// Log output format
    #[arg(long = "log-format", value_enum, env = "DEFAULT_BACKEND_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Build the validated configuration for this invocation.
    pub fn into_config(self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ProxyConfig::default(),
        };
        self.apply(&mut config);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn apply(self, config: &mut ProxyConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(service) = self.service {
            config.backend.service_name = service;
        }
        if let Some(service_port) = self.service_port {
            config.backend.service_port = service_port;
        }
        if let Some(namespace) = self.namespace {
            config.backend.namespace = namespace;
        }
        if let Some(host) = self.host {
            config.upstream.host = host;
        }
        if let Some(page) = self.not_found_page {
            config.not_found.page = page;
        }
        if let Some(addr) = self.connect_to {
            config.upstream.connect_to = Some(addr);
        }
        if let Some(secs) = self.upstream_timeout_secs {
            config.upstream.timeout_secs = Some(secs);
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}
