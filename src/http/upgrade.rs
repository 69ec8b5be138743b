//! Protocol upgrades (WebSocket and friends) through the proxy.
//!
//! `Connection` and `Upgrade` are hop-by-hop, so they are stripped like the
//! rest and put back only when the caller asked to switch protocols. Once the
//! backend answers 101 both connections are handed over and spliced.

use axum::http::header::{self, HeaderMap, HeaderValue};
use hyper::upgrade::OnUpgrade;
use hyper_util::rt::TokioIo;

/// Protocol the peer asks to switch to, if any.
pub fn requested(headers: &HeaderMap) -> Option<HeaderValue> {
    let wants_upgrade = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|token| token.trim().eq_ignore_ascii_case("upgrade"));

    if wants_upgrade {
        headers.get(header::UPGRADE).cloned()
    } else {
        None
    }
}

/// Re-add the upgrade request after hop-by-hop headers were stripped.
pub fn restore(headers: &mut HeaderMap, protocol: HeaderValue) {
    headers.insert(header::CONNECTION, HeaderValue::from_static("upgrade"));
    headers.insert(header::UPGRADE, protocol);
}

/// Splice caller and backend once both sides have switched protocols.
pub fn tunnel(caller: OnUpgrade, backend: OnUpgrade) {
    tokio::spawn(async move {
        let (caller, backend) = match tokio::try_join!(caller, backend) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(error = %e, "Protocol upgrade failed");
                return;
            }
        };

        let mut caller = TokioIo::new(caller);
        let mut backend = TokioIo::new(backend);
        match tokio::io::copy_bidirectional(&mut caller, &mut backend).await {
            Ok((to_backend, to_caller)) => {
                tracing::debug!(to_backend, to_caller, "Upgraded connection closed")
            }
            Err(e) => tracing::debug!(error = %e, "Upgraded connection ended"),
        }
    });
}
