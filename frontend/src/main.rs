use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use frontend::{
    conf::Conf,
    input::HELP,
    session,
    view::View,
    wallet::{RpcWallet, WalletProvider},
};
use tokio::io::BufReader;
use tracing::{info, warn};
use utils::logger::setup_tracing;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "frontend.toml")]
    pub config_file: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Conf::new(args.config_file).context("reading config file")?;

    // stdout carries the rendered view
    setup_tracing(&config.log_format, config.id.clone(), std::io::stderr)
        .context("setting up tracing")?;

    info!("Starting frontend with config: {:?}", &config);

    let provider: Option<Arc<dyn WalletProvider>> = match &config.wallet {
        Some(wallet) => Some(Arc::new(
            RpcWallet::connect(wallet).context("building wallet provider")?,
        )),
        None => {
            warn!("No wallet configured, contract actions will ask for one");
            None
        }
    };
    let view = Arc::new(View::new(provider));

    println!("{}\n\n{HELP}", view.render());

    session::run(view, BufReader::new(tokio::io::stdin()), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await;
        }
        info!("Ctrl-C received, shutting down");
    })
    .await
}
