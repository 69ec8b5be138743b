//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the health and proxy handlers
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener, one task per connection
//! - Stop accepting and drain on shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::http::forward::Forwarder;
use crate::http::handler::handle;
use crate::http::health::{healthz, HEALTH_PATH};
use crate::http::not_found::NotFoundPage;
use crate::http::request::RequestIdMaker;
use crate::lifecycle::ShutdownSignal;
use crate::routing::TargetResolver;

/// Application state injected into handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TargetResolver>,
    pub forwarder: Forwarder,
    pub not_found: NotFoundPage,
}

/// HTTP server for the default backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ProxyError> {
        let resolver = TargetResolver::new(config.backend.clone());
        let state = AppState {
            forwarder: Forwarder::new(&config.upstream, resolver.base_url())?,
            resolver: Arc::new(resolver),
            not_found: NotFoundPage::new(config.not_found.page.clone()),
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(HEALTH_PATH, any(healthz))
            .route("/{*path}", any(handle))
            .route("/", any(handle))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestIdMaker))
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are allowed to finish.
    pub async fn run(self, listener: TcpListener, mut shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.recv().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving without a listener (tests).
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
