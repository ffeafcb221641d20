use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use server::{app, conf::Conf};
use tokio::net::TcpListener;
use tracing::{info, warn};
use utils::logger::setup_tracing;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "config.toml")]
    pub config_file: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Conf::new(args.config_file).context("reading config file")?;

    setup_tracing(&config.log_format, config.id.clone(), std::io::stdout)
        .context("setting up tracing")?;

    info!("Starting hello responder with config: {:?}", &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("📡 Listening on {}", addr);

    axum::serve(listener, app::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving http")?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix;
        let mut terminate = match unix::signal(unix::SignalKind::terminate()) {
            Ok(terminate) => terminate,
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {:?}", e);
                _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, shutting down");
            }
            _ = terminate.recv() => {
                info!("SIGTERM received, shutting down");
            }
        }
    }
    #[cfg(not(unix))]
    {
        _ = tokio::signal::ctrl_c().await;
        info!("Ctrl-C received, shutting down");
    }
}
