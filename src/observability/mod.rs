//! Observability subsystem.
//!
//! Logging only: every subsystem emits `tracing` events, the request ID is
//! attached to handler events, and tower-http's `TraceLayer` wraps each
//! request in a span.

pub mod logging;
