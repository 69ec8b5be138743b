//! Request-scoped errors.
//!
//! Each variant maps to the status the original caller sees. The response
//! body is a short reason; the detail only goes to the log.

use std::path::PathBuf;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid target url {target:?}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("target url {0:?} does not address the configured backend")]
    ForeignTarget(String),

    #[error("target url {0:?} cannot be used as a request uri")]
    InvalidUri(String),

    #[error("external host {0:?} is not a valid header value")]
    InvalidHost(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),

    #[error("upstream switched protocols without being asked to")]
    UnexpectedUpgrade,

    #[error("upstream did not respond within {0:?}")]
    UpstreamTimeout(Duration),

    #[error("failed to read not-found page {path}: {source}")]
    NotFoundPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidTarget { .. }
            | ProxyError::ForeignTarget(_)
            | ProxyError::InvalidUri(_)
            | ProxyError::InvalidHost(_)
            | ProxyError::NotFoundPage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) | ProxyError::UnexpectedUpgrade => StatusCode::BAD_GATEWAY,
            ProxyError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = match self {
            ProxyError::Upstream(_) | ProxyError::UnexpectedUpgrade => "Upstream request failed",
            ProxyError::UpstreamTimeout(_) => "Upstream request timed out",
            _ => "Internal server error",
        };
        (status, reason).into_response()
    }
}
