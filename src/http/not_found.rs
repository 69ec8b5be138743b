//! Static not-found page.
//!
//! The page is read from disk on every miss so it can be swapped (e.g. a
//! re-mounted ConfigMap) without a restart. A missing page fails only the
//! request that needed it.

use std::path::PathBuf;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone)]
pub struct NotFoundPage {
    path: PathBuf,
}

impl NotFoundPage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 404 response carrying the page.
    pub async fn render(&self) -> Result<Response, ProxyError> {
        let page = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ProxyError::NotFoundPage {
                path: self.path.clone(),
                source,
            })?;

        Ok((
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_HTML))],
            page,
        )
            .into_response())
    }
}
