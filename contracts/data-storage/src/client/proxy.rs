use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder},
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    parse_data_id,
    IDataStorage::{self, IDataStorageInstance},
};

/// Handle on the data-storage contract, bound to an address and a signing provider.
///
/// Identifiers are taken as typed by the user and parsed right before the
/// call, so a malformed id fails the same way a reverted call does.
#[derive(Clone)]
pub struct DataStorageProxy {
    instance: IDataStorageInstance<DynProvider>,
}

impl DataStorageProxy {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IDataStorage::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub async fn write_data(&self, data: &str) -> Result<PendingTransactionBuilder<Ethereum>> {
        debug!(contract = %self.address(), "sending writeData");
        self.instance
            .writeData(data.to_owned())
            .send()
            .await
            .context("sending writeData transaction")
    }

    pub async fn get_data(&self, id: &str) -> Result<String> {
        let id = parse_data_id(id)?;
        debug!(contract = %self.address(), %id, "calling getData");
        self.instance
            .getData(id)
            .call()
            .await
            .context("calling getData")
    }

    pub async fn update_data(
        &self,
        id: &str,
        new_data: &str,
    ) -> Result<PendingTransactionBuilder<Ethereum>> {
        let id = parse_data_id(id)?;
        debug!(contract = %self.address(), %id, "sending updateData");
        self.instance
            .updateData(id, new_data.to_owned())
            .send()
            .await
            .context("sending updateData transaction")
    }

    pub async fn delete_data(&self, id: &str) -> Result<PendingTransactionBuilder<Ethereum>> {
        let id = parse_data_id(id)?;
        debug!(contract = %self.address(), %id, "sending deleteData");
        self.instance
            .deleteData(id)
            .send()
            .await
            .context("sending deleteData transaction")
    }
}
