use std::{future::Future, sync::Arc};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinSet,
};
use tracing::{error, info};

use crate::{
    input::{Command, HELP},
    view::View,
};

/// Feeds `input` line by line to the view until EOF, `quit` or `shutdown`.
///
/// Each button press runs as its own task so presses overlap. On EOF or
/// `quit` the presses still in flight are awaited so their outcome is shown;
/// `shutdown` aborts them.
pub async fn run<R, S>(view: Arc<View>, input: R, shutdown: S) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut lines = input.lines();
    let mut presses = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!(in_flight = presses.len(), "Shutdown requested, aborting pending actions");
                presses.shutdown().await;
                return Ok(());
            }
            line = lines.next_line() => line.context("reading input")?,
        };
        let Some(line) = line else {
            break;
        };

        while let Some(done) = presses.try_join_next() {
            log_join(done);
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Set(field, value)) => view.set_field(field, value),
            Ok(Command::Press(action)) => {
                let view = view.clone();
                presses.spawn(async move {
                    view.dispatch(action).await;
                    println!("{}", view.render());
                });
            }
            Ok(Command::Show) => println!("{}", view.render()),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(e) => println!("{e:#}. Type `help` for the list of commands."),
        }
    }

    if !presses.is_empty() {
        info!(in_flight = presses.len(), "Waiting for pending actions");
    }
    tokio::select! {
        biased;
        _ = &mut shutdown => {
            info!("Shutdown requested, aborting pending actions");
        }
        _ = async {
            while let Some(done) = presses.join_next().await {
                log_join(done);
            }
        } => {}
    }

    Ok(())
}

fn log_join(done: Result<(), tokio::task::JoinError>) {
    if let Err(e) = done {
        error!("Action task failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy::primitives::Address;
    use anyhow::bail;
    use async_trait::async_trait;
    use tokio::io::BufReader;

    use super::*;
    use crate::wallet::{ContractSigner, WalletProvider};

    /// Wallet whose endpoint answers late, then fails.
    struct SlowWallet;

    #[async_trait]
    impl WalletProvider for SlowWallet {
        async fn request_accounts(&self) -> Result<Vec<Address>> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            bail!("rpc endpoint timed out")
        }

        async fn signer(&self) -> Result<Arc<dyn ContractSigner>> {
            bail!("no signer")
        }
    }

    fn slow_view() -> Arc<View> {
        Arc::new(View::new(Some(Arc::new(SlowWallet))))
    }

    #[tokio::test]
    async fn test_eof_waits_for_pending_actions() {
        let view = slow_view();
        let input = BufReader::new(&b"email alice@example.com\ncheck\n"[..]);

        run(view.clone(), input, std::future::pending()).await.unwrap();

        assert_eq!(
            view.snapshot().message,
            "An error occurred while checking registration status. Please try again."
        );
    }

    #[tokio::test]
    async fn test_quit_waits_for_pending_actions() {
        let view = slow_view();
        let input = BufReader::new(&b"data payload\nwrite\nquit\nemail ignored\n"[..]);

        run(view.clone(), input, std::future::pending()).await.unwrap();

        let state = view.snapshot();
        assert_eq!(state.message, "An error occurred while writing data.");
        assert_eq!(state.email, "");
    }

    #[tokio::test]
    async fn test_shutdown_aborts_pending_actions() {
        let view = slow_view();
        let input = BufReader::new(&b"email alice@example.com\ncheck\n"[..]);

        run(view.clone(), input, async {}).await.unwrap();

        assert_eq!(view.snapshot().message, "");
    }

    #[tokio::test]
    async fn test_fields_and_local_prompts() {
        let view = Arc::new(View::new(None));
        let input = BufReader::new(&b"id 7\n\nbogus\nget\n"[..]);

        run(view.clone(), input, std::future::pending()).await.unwrap();

        let state = view.snapshot();
        assert_eq!(state.data_id, "7");
        assert_eq!(state.message, "Please install MetaMask");
    }
}
