use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redeemd_server::infra::app_state::AppState;
use redeemd_server::infra::config::Config;
use redeemd_server::routes;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "redeemd-server")]
#[command(about = "Order-taking service with concurrent coupon-code validation")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "REDEEMD_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "REDEEMD_PORT")]
    port: Option<u16>,

    /// Directory of coupon source files
    #[arg(long, env = "REDEEMD_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "redeemd_server=info,redeemd_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.coupon.data_dir = data_dir;
    }
    config.validate().context("validating configuration")?;

    let addr: SocketAddr = config.server.bind_addr()?;
    info!(
        data_dir = %config.coupon.data_dir.display(),
        workers = config.coupon.workers,
        "starting redeemd server"
    );

    let state = AppState::new(Arc::new(config));
    let app = routes::create_api_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
