//! Contract-interaction view.
//!
//! One async method per button. Each reads the form, checks its required
//! inputs, then walks the wallet through account access, signer, proxy and
//! a single remote call. The outcome only ever lands in [`ViewState`].
//!
//! Actions are not sequenced: two in flight may finish in any order and the
//! later one owns the status message.

use std::{
    fmt,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::Result;
use contracts::{DATA_STORAGE_ADDRESS, USER_REGISTRATION_ADDRESS};
use tracing::{debug, error, info};

use crate::{
    render,
    state::{Field, ViewState},
    wallet::{ContractSigner, WalletProvider},
};


pub const INSTALL_WALLET: &str = "Please install MetaMask";

pub const REGISTERED: &str = "You have been successfully registered!";
pub const DEACTIVATED: &str = "User has been successfully deactivated!";
pub const DATA_WRITTEN: &str = "Data written successfully!";
pub const DATA_RETRIEVED: &str = "Data retrieved successfully!";
pub const DATA_UPDATED: &str = "Data updated successfully!";
pub const DATA_DELETED: &str = "Data deleted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Register,
    CheckRegistration,
    Deactivate,
    WriteData,
    GetData,
    UpdateData,
    DeleteData,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Register,
        Action::CheckRegistration,
        Action::Deactivate,
        Action::WriteData,
        Action::GetData,
        Action::UpdateData,
        Action::DeleteData,
    ];

    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Action::Register => &[Field::Email, Field::Password],
            Action::CheckRegistration | Action::Deactivate => &[Field::Email],
            Action::WriteData => &[Field::Data],
            Action::GetData | Action::DeleteData => &[Field::DataId],
            Action::UpdateData => &[Field::DataId, Field::NewData],
        }
    }

    /// Prompt shown when one of the required fields is empty.
    pub fn missing_input_message(self) -> &'static str {
        match self {
            Action::Register => "Please fill in all fields",
            Action::CheckRegistration => "Please enter your email to check registration status",
            Action::Deactivate => "Please enter your email to deactivate the user",
            Action::WriteData => "Please enter data to write",
            Action::GetData => "Please enter data ID to retrieve",
            Action::UpdateData => "Please enter both data ID and new data to update",
            Action::DeleteData => "Please enter data ID to delete",
        }
    }

    /// Shown for every remote failure, whatever its cause.
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Register => "An error occurred. Please try again.",
            Action::CheckRegistration => {
                "An error occurred while checking registration status. Please try again."
            }
            Action::Deactivate => {
                "An error occurred while deactivating the user. Please try again."
            }
            Action::WriteData => "An error occurred while writing data.",
            Action::GetData => "An error occurred while retrieving data.",
            Action::UpdateData => "An error occurred while updating data.",
            Action::DeleteData => "An error occurred while deleting data.",
        }
    }

    /// Contract method the action invokes.
    pub fn method(self) -> &'static str {
        match self {
            Action::Register => "register",
            Action::CheckRegistration => "isRegistered",
            Action::Deactivate => "deactivate",
            Action::WriteData => "writeData",
            Action::GetData => "getData",
            Action::UpdateData => "updateData",
            Action::DeleteData => "deleteData",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

pub struct View {
    state: Mutex<ViewState>,
    provider: Option<Arc<dyn WalletProvider>>,
}

impl View {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self {
            state: Mutex::new(ViewState::default()),
            provider,
        }
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.lock().set_field(field, value);
    }

    pub fn render(&self) -> String {
        render::render(&self.snapshot())
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::Register => self.register().await,
            Action::CheckRegistration => self.check_registration().await,
            Action::Deactivate => self.deactivate().await,
            Action::WriteData => self.write_data().await,
            Action::GetData => self.get_data().await,
            Action::UpdateData => self.update_data().await,
            Action::DeleteData => self.delete_data().await,
        }
    }

    pub async fn register(&self) {
        let Some((email, password)) = self.inputs(Action::Register, |s| {
            (s.email.clone(), s.password.clone())
        }) else {
            return;
        };

        self.run(Action::Register, |signer| async move {
            let tx = signer
                .user_registration(USER_REGISTRATION_ADDRESS)
                .register(&email, &password)
                .await?;
            info!(tx = %tx.hash(), "register submitted");
            tx.confirmed().await?;

            self.update(|s| {
                s.message = REGISTERED.to_string();
                s.is_deactivated = false;
            });
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn check_registration(&self) {
        let Some(email) = self.inputs(Action::CheckRegistration, |s| s.email.clone()) else {
            return;
        };

        self.run(Action::CheckRegistration, |signer| async move {
            let registered = signer
                .user_registration(USER_REGISTRATION_ADDRESS)
                .is_registered(&email)
                .await?;

            self.update(|s| {
                s.is_registered = registered;
                s.message = format!(
                    "User registration status: {}",
                    if registered {
                        "Registered"
                    } else {
                        "Not Registered"
                    }
                );
            });
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn deactivate(&self) {
        let Some(email) = self.inputs(Action::Deactivate, |s| s.email.clone()) else {
            return;
        };

        self.run(Action::Deactivate, |signer| async move {
            let tx = signer
                .user_registration(USER_REGISTRATION_ADDRESS)
                .deactivate(&email)
                .await?;
            info!(tx = %tx.hash(), "deactivate submitted");
            tx.confirmed().await?;

            self.update(|s| {
                s.message = DEACTIVATED.to_string();
                s.is_deactivated = true;
            });
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn write_data(&self) {
        let Some(data) = self.inputs(Action::WriteData, |s| s.data.clone()) else {
            return;
        };

        self.run(Action::WriteData, |signer| async move {
            let tx = signer
                .data_storage(DATA_STORAGE_ADDRESS)
                .write_data(&data)
                .await?;
            info!(tx = %tx.hash(), "writeData submitted");
            tx.confirmed().await?;

            self.set_message(DATA_WRITTEN);
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn get_data(&self) {
        let Some(id) = self.inputs(Action::GetData, |s| s.data_id.clone()) else {
            return;
        };

        self.run(Action::GetData, |signer| async move {
            let value = signer
                .data_storage(DATA_STORAGE_ADDRESS)
                .get_data(&id)
                .await?;

            self.update(|s| {
                s.retrieved_data = value;
                s.message = DATA_RETRIEVED.to_string();
            });
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn update_data(&self) {
        let Some((id, new_data)) = self.inputs(Action::UpdateData, |s| {
            (s.data_id.clone(), s.new_data.clone())
        }) else {
            return;
        };

        self.run(Action::UpdateData, |signer| async move {
            let tx = signer
                .data_storage(DATA_STORAGE_ADDRESS)
                .update_data(&id, &new_data)
                .await?;
            info!(tx = %tx.hash(), "updateData submitted");
            tx.confirmed().await?;

            self.set_message(DATA_UPDATED);
            anyhow::Ok(())
        })
        .await;
    }

    pub async fn delete_data(&self) {
        let Some(id) = self.inputs(Action::DeleteData, |s| s.data_id.clone()) else {
            return;
        };

        self.run(Action::DeleteData, |signer| async move {
            let tx = signer
                .data_storage(DATA_STORAGE_ADDRESS)
                .delete_data(&id)
                .await?;
            info!(tx = %tx.hash(), "deleteData submitted");
            tx.confirmed().await?;

            self.set_message(DATA_DELETED);
            anyhow::Ok(())
        })
        .await;
    }

    /// Reads the action's inputs, or sets its prompt when one is empty.
    fn inputs<T>(&self, action: Action, read: impl FnOnce(&ViewState) -> T) -> Option<T> {
        let mut state = self.lock();
        if let Some(field) = state.first_missing(action.required_fields()) {
            debug!(%action, %field, "missing input");
            state.message = action.missing_input_message().to_string();
            return None;
        }
        Some(read(&state))
    }

    async fn run<F, Fut>(&self, action: Action, call: F)
    where
        F: FnOnce(Arc<dyn ContractSigner>) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let Some(provider) = self.provider.clone() else {
            self.set_message(INSTALL_WALLET);
            return;
        };

        let outcome = match connect(provider.as_ref(), action).await {
            Ok(signer) => call(signer).await,
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            error!(%action, "{:#}", e);
            self.set_message(action.failure_message());
        }
    }

    fn set_message(&self, message: &str) {
        self.update(|s| s.message = message.to_string());
    }

    fn update(&self, apply: impl FnOnce(&mut ViewState)) {
        apply(&mut self.lock());
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn connect(provider: &dyn WalletProvider, action: Action) -> Result<Arc<dyn ContractSigner>> {
    let accounts = provider.request_accounts().await?;
    let signer = provider.signer().await?;
    debug!(%action, signer = %signer.address(), accounts = accounts.len(), "signer ready");
    Ok(signer)
}
