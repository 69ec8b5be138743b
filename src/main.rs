use clap::Parser;

use default_backend::cli::Cli;
use default_backend::http::HttpServer;
use default_backend::lifecycle::{signals, Shutdown};
use default_backend::net;
use default_backend::observability::logging;
use default_backend::routing::TargetResolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init(config.observability.log_format);

    tracing::info!("default-backend v{} starting", env!("CARGO_PKG_VERSION"));

    let backend = TargetResolver::new(config.backend.clone());
    tracing::info!(
        listen_address = %config.listener.socket_addr(),
        service = %backend.identity().service_name,
        service_port = %backend.identity().service_port,
        namespace = %backend.identity().namespace,
        target = %backend.base_url(),
        external_host = %config.upstream.host,
        not_found_page = %config.not_found.page.display(),
        "Configuration loaded"
    );
    if let Some(addr) = config.upstream.connect_to {
        tracing::warn!(address = %addr, "Backend connections pinned, skipping DNS");
    }

    let listener = net::bind(&config.listener).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        signals::terminate().await;
        shutdown.trigger();
    });

    server.run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
