//! Routing header extraction.

use axum::http::HeaderMap;

/// Header in which the ingress controller reports the original request URI.
pub const ORIGINAL_URI_HEADER: &str = "x-original-uri";

/// Read the original URI from `headers`.
///
/// A missing header yields the empty string. So does a value that is not
/// visible ASCII, since it cannot be placed in a URL as-is.
pub fn original_uri(headers: &HeaderMap) -> &str {
    let Some(value) = headers.get(ORIGINAL_URI_HEADER) else {
        return "";
    };
    match value.to_str() {
        Ok(uri) => uri,
        Err(_) => {
            tracing::warn!(
                header = ORIGINAL_URI_HEADER,
                "Ignoring routing header with non-ASCII bytes"
            );
            ""
        }
    }
}
