//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file)
//!     → cli.rs (flags and environment override the file)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer, never looked up globally
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, read_config, ConfigError};
pub use schema::{
    BackendIdentity, ListenerConfig, LogFormat, NotFoundConfig, ObservabilityConfig,
    ProxyConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
