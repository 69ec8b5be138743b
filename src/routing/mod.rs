//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (x-original-uri header)
//!     → header.rs (extract original URI, "" when absent)
//!     → resolver.rs (BackendIdentity + original URI → target URL)
//!     → Return: Some(url) or None (serve the not-found page)
//! ```
//!
//! # Design Decisions
//! - Exactly one backend; there is no route table
//! - Resolution is a pure function of the header and the startup identity
//! - Empty header means "no target", never an error

pub mod header;
pub mod resolver;

pub use header::{original_uri, ORIGINAL_URI_HEADER};
pub use resolver::{resolve, TargetResolver, CLUSTER_DOMAIN};
