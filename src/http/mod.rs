//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing)
//!     → /healthz → health.rs
//!     → anything else → handler.rs
//!         → routing (x-original-uri → target URL)
//!         → no target: not_found.rs (static 404 page)
//!         → target:    forward.rs (stream to backend and back)
//!             → 101:   upgrade.rs (splice both connections)
//! ```

pub mod forward;
pub mod handler;
pub mod health;
pub mod not_found;
pub mod request;
pub mod server;
pub mod upgrade;

pub use forward::Forwarder;
pub use not_found::NotFoundPage;
pub use request::{RequestIdMaker, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
