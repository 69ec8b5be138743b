//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound:
//!     listener.rs (bind listen address, fatal on failure)
//!     → axum::serve (one task per connection)
//!
//! Outbound:
//!     target URL authority
//!     → connector.rs (as-is, or pinned to a fixed socket address)
//!     → HttpConnector → backend
//! ```

pub mod connector;
pub mod listener;

pub use connector::UpstreamConnector;
pub use listener::{bind, ListenerError};
