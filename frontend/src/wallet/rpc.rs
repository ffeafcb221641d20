use std::sync::Arc;

use alloy::{
    network::{Ethereum, EthereumWallet, ReceiptResponse},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use contracts::{DataStorageProxy, UserRegistrationProxy};
use tracing::debug;

use super::{ContractSigner, DataStorage, PendingTx, UserRegistration, WalletProvider};
use crate::conf::WalletConf;

/// Wallet backed by a JSON-RPC endpoint and a single local key.
pub struct RpcWallet {
    provider: DynProvider,
    account: Address,
}

impl RpcWallet {
    pub fn connect(conf: &WalletConf) -> Result<Self> {
        let signer: PrivateKeySigner = conf
            .private_key
            .parse()
            .context("parsing wallet private key")?;
        let account = signer.address();
        let url: Url = conf.rpc_url.parse().context("parsing wallet rpc url")?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        Ok(Self { provider, account })
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .context("requesting account access")?;
        debug!(chain_id, account = %self.account, "account access granted");
        Ok(vec![self.account])
    }

    async fn signer(&self) -> Result<Arc<dyn ContractSigner>> {
        Ok(Arc::new(RpcSigner {
            provider: self.provider.clone(),
            account: self.account,
        }))
    }
}

struct RpcSigner {
    provider: DynProvider,
    account: Address,
}

impl ContractSigner for RpcSigner {
    fn address(&self) -> Address {
        self.account
    }

    fn user_registration(&self, address: Address) -> Box<dyn UserRegistration> {
        Box::new(UserRegistrationProxy::new(address, self.provider.clone()))
    }

    fn data_storage(&self, address: Address) -> Box<dyn DataStorage> {
        Box::new(DataStorageProxy::new(address, self.provider.clone()))
    }
}

/// Waits for the receipt; a mined but reverted transaction is an error.
fn confirmation(pending: PendingTransactionBuilder<Ethereum>) -> PendingTx {
    let hash = *pending.tx_hash();
    PendingTx::new(
        hash,
        Box::pin(async move {
            let receipt = pending
                .get_receipt()
                .await
                .with_context(|| format!("waiting for receipt of {hash}"))?;
            ensure!(
                ReceiptResponse::status(&receipt),
                "transaction {hash} reverted"
            );
            Ok(ReceiptResponse::transaction_hash(&receipt))
        }),
    )
}

#[async_trait]
impl UserRegistration for UserRegistrationProxy {
    async fn register(&self, email: &str, password: &str) -> Result<PendingTx> {
        UserRegistrationProxy::register(self, email, password)
            .await
            .map(confirmation)
    }

    async fn is_registered(&self, email: &str) -> Result<bool> {
        UserRegistrationProxy::is_registered(self, email).await
    }

    async fn deactivate(&self, email: &str) -> Result<PendingTx> {
        UserRegistrationProxy::deactivate(self, email)
            .await
            .map(confirmation)
    }
}

#[async_trait]
impl DataStorage for DataStorageProxy {
    async fn write_data(&self, data: &str) -> Result<PendingTx> {
        DataStorageProxy::write_data(self, data)
            .await
            .map(confirmation)
    }

    async fn get_data(&self, id: &str) -> Result<String> {
        DataStorageProxy::get_data(self, id).await
    }

    async fn update_data(&self, id: &str, new_data: &str) -> Result<PendingTx> {
        DataStorageProxy::update_data(self, id, new_data)
            .await
            .map(confirmation)
    }

    async fn delete_data(&self, id: &str) -> Result<PendingTx> {
        DataStorageProxy::delete_data(self, id)
            .await
            .map(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known development key, never funded outside local chains.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_connect_derives_account() {
        let wallet = RpcWallet::connect(&WalletConf {
            rpc_url: "http://localhost:8545".to_string(),
            private_key: DEV_KEY.to_string(),
        })
        .unwrap();
        assert_eq!(
            wallet.account.to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_connect_rejects_bad_inputs() {
        assert!(RpcWallet::connect(&WalletConf {
            rpc_url: "http://localhost:8545".to_string(),
            private_key: "not-a-key".to_string(),
        })
        .is_err());
        assert!(RpcWallet::connect(&WalletConf {
            rpc_url: "not a url".to_string(),
            private_key: DEV_KEY.to_string(),
        })
        .is_err());
    }
}
