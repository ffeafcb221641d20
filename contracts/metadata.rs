use alloy::primitives::{address, Address};

pub use data_storage::client::DataStorageProxy;
pub use user_registration::client::UserRegistrationProxy;

/// Deployed user-registration contract.
pub const USER_REGISTRATION_ADDRESS: Address =
    address!("900ec7f63e37d020794081eb040e678d0635e2b7");

/// Deployed data-storage contract.
pub const DATA_STORAGE_ADDRESS: Address = address!("875a0ef4019b6caf9c79aa7321771ad98736d7b9");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_distinct() {
        assert_ne!(USER_REGISTRATION_ADDRESS, DATA_STORAGE_ADDRESS);
        assert_eq!(
            USER_REGISTRATION_ADDRESS.to_string().to_lowercase(),
            "0x900ec7f63e37d020794081eb040e678d0635e2b7"
        );
        assert_eq!(
            DATA_STORAGE_ADDRESS.to_string().to_lowercase(),
            "0x875a0ef4019b6caf9c79aa7321771ad98736d7b9"
        );
    }
}
