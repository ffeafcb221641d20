use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder},
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::IUserRegistration::{self, IUserRegistrationInstance};

/// Handle on the registration contract, bound to an address and a signing provider.
#[derive(Clone)]
pub struct UserRegistrationProxy {
    instance: IUserRegistrationInstance<DynProvider>,
}

impl UserRegistrationProxy {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: IUserRegistration::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PendingTransactionBuilder<Ethereum>> {
        debug!(contract = %self.address(), "sending register");
        self.instance
            .register(email.to_owned(), password.to_owned())
            .send()
            .await
            .context("sending register transaction")
    }

    pub async fn is_registered(&self, email: &str) -> Result<bool> {
        debug!(contract = %self.address(), "calling isRegistered");
        self.instance
            .isRegistered(email.to_owned())
            .call()
            .await
            .context("calling isRegistered")
    }

    pub async fn deactivate(&self, email: &str) -> Result<PendingTransactionBuilder<Ethereum>> {
        debug!(contract = %self.address(), "sending deactivate");
        self.instance
            .deactivate(email.to_owned())
            .send()
            .await
            .context("sending deactivate transaction")
    }
}
