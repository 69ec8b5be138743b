//! Request handler: resolve, then forward or fall back to the not-found page.

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::Request;
use axum::response::{IntoResponse, Response};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::routing::original_uri;

pub async fn handle(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers()).to_string();
    let original_path = original_uri(request.headers()).to_string();

    let Some(target) = state.resolver.resolve(&original_path) else {
        tracing::debug!(request_id = %request_id, "No original URI, serving not-found page");
        return match state.not_found.render().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Can't serve not-found page");
                e.into_response()
            }
        };
    };

    tracing::info!(
        request_id = %request_id,
        original_path = %original_path,
        proxy_url = %target,
        "Proxying request"
    );

    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    match state.forwarder.forward(&target, request, client_addr).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                proxy_url = %target,
                error = %e,
                "Upstream error"
            );
            e.into_response()
        }
    }
}
