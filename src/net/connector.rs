//! Backend connector.
//!
//! The target URL always names the cluster-local service. Inside the cluster
//! the connector resolves that name normally. Outside of it (local runs,
//! tests) every connection can be pinned to a fixed socket address, port
//! included; the URL and `Host` header sent to the backend do not change.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::http::uri::{Authority, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tower::Service;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Connector handed to the upstream client.
#[derive(Clone)]
pub struct UpstreamConnector {
    http: HttpConnector,
    pinned: Option<Authority>,
}

impl UpstreamConnector {
    pub fn new(connect_to: Option<SocketAddr>) -> Self {
        let mut http = HttpConnector::new();
        http.set_nodelay(true);
        Self {
            http,
            // A socket address always renders as a valid authority.
            pinned: connect_to.and_then(|addr| Authority::try_from(addr.to_string()).ok()),
        }
    }

    /// The destination actually dialled for `uri`.
    fn destination(&self, uri: Uri) -> Result<Uri, BoxError> {
        let Some(pinned) = &self.pinned else {
            return Ok(uri);
        };
        tracing::trace!(uri = %uri, address = %pinned, "Using pinned backend address");
        let mut parts = uri.into_parts();
        parts.authority = Some(pinned.clone());
        Ok(Uri::from_parts(parts)?)
    }
}

impl Service<Uri> for UpstreamConnector {
    type Response = TokioIo<TcpStream>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, BoxError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.http.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, uri: Uri) -> Self::Future {
        let dst = match self.destination(uri) {
            Ok(dst) => dst,
            Err(e) => return Box::pin(async move { Err(e) }),
        };
        let connecting = self.http.call(dst);
        Box::pin(async move { connecting.await.map_err(Into::into) })
    }
}
