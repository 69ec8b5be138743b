//! Default backend proxy.
//!
//! Sits behind an ingress controller as its default backend. The controller
//! reports the original request URI in `x-original-uri`; the request is
//! forwarded to one fixed in-cluster service at that path, presenting a
//! configured external host. Requests without the header get a static 404
//! page.
//!
//! ```text
//!     Ingress ──▶ http::server ──▶ /healthz ──▶ "healthy!"
//!                      │
//!                      ▼
//!                 http::handler ──▶ routing::resolver
//!                      │                   │
//!              None ◀──┴──▶ Some(url)      │
//!                │              │
//!                ▼              ▼
//!       http::not_found   http::forward ──▶ svc.ns.svc.cluster.local:port
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
