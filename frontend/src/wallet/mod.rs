//! Seams between the view and whatever grants account access and signs.
//!
//! The view only ever talks to these traits. [`RpcWallet`] backs them with a
//! JSON-RPC endpoint and a local key; tests back them with an in-memory chain.

use std::{fmt, sync::Arc};

use alloy::primitives::{Address, TxHash};
use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;

mod rpc;

pub use rpc::RpcWallet;

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Asks for account access. Granting twice is harmless.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    async fn signer(&self) -> Result<Arc<dyn ContractSigner>>;
}

/// Signing handle able to bind contract proxies to an address.
pub trait ContractSigner: Send + Sync {
    fn address(&self) -> Address;

    fn user_registration(&self, address: Address) -> Box<dyn UserRegistration>;

    fn data_storage(&self, address: Address) -> Box<dyn DataStorage>;
}

#[async_trait]
pub trait UserRegistration: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<PendingTx>;

    async fn is_registered(&self, email: &str) -> Result<bool>;

    async fn deactivate(&self, email: &str) -> Result<PendingTx>;
}

#[async_trait]
pub trait DataStorage: Send + Sync {
    async fn write_data(&self, data: &str) -> Result<PendingTx>;

    async fn get_data(&self, id: &str) -> Result<String>;

    async fn update_data(&self, id: &str, new_data: &str) -> Result<PendingTx>;

    async fn delete_data(&self, id: &str) -> Result<PendingTx>;
}

/// A submitted transaction. Resolves once it is mined, failing if it reverted.
pub struct PendingTx {
    hash: TxHash,
    confirmation: BoxFuture<'static, Result<TxHash>>,
}

impl PendingTx {
    pub fn new(hash: TxHash, confirmation: BoxFuture<'static, Result<TxHash>>) -> Self {
        Self { hash, confirmation }
    }

    pub fn hash(&self) -> TxHash {
        self.hash
    }

    pub async fn confirmed(self) -> Result<TxHash> {
        self.confirmation.await
    }
}

impl fmt::Debug for PendingTx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTx")
            .field("hash", &self.hash)
            .finish_non_exhaustive()
    }
}
