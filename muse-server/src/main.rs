use clap::Parser;
use muse_server::config::ServerArgs;
use muse_server::{create_router, ListerState};
use std::sync::Arc;
use tracing::{error, info, warn};

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    configure_logging();
    let args = ServerArgs::parse();

    info!("muse-server starting");

    let audio_dir = args.audio_dir().unwrap_or_else(|e| {
        error!("Failed to resolve working directory: {e}");
        std::process::exit(1);
    });

    // Listing failures are answered per request, so a missing directory is not fatal here
    if !audio_dir.is_dir() {
        warn!(
            "Audio directory {} does not exist yet; listings will fail until it does",
            audio_dir.display()
        );
    }
    info!("Listing audio from {}", audio_dir.display());
    if args.serve_static {
        info!("Serving audio files under /audio");
    }

    let state = Arc::new(ListerState {
        audio_dir,
        serve_static: args.serve_static,
    });
    let app = create_router(state);
    let addr = args.addr();

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("muse-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
