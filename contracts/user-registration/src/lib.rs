use alloy::sol;

pub mod client;

sol! {
    /// Interface descriptor of the deployed user-registration contract.
    ///
    /// Only the methods the front-end calls are declared; the contract itself
    /// owns registration records and their validation.
    #[sol(rpc)]
    interface IUserRegistration {
        function register(string calldata email, string calldata password) external;
        function isRegistered(string calldata email) external view returns (bool);
        function deactivate(string calldata email) external;
    }
}

#[cfg(test)]
mod tests {
    use super::IUserRegistration;
    use alloy::{primitives::keccak256, sol_types::SolCall};

    fn selector_of(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature.as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    #[test]
    fn test_signatures() {
        assert_eq!(
            IUserRegistration::registerCall::SIGNATURE,
            "register(string,string)"
        );
        assert_eq!(
            IUserRegistration::isRegisteredCall::SIGNATURE,
            "isRegistered(string)"
        );
        assert_eq!(
            IUserRegistration::deactivateCall::SIGNATURE,
            "deactivate(string)"
        );
        assert_eq!(
            IUserRegistration::registerCall::SELECTOR,
            selector_of("register(string,string)")
        );
        assert_eq!(
            IUserRegistration::isRegisteredCall::SELECTOR,
            selector_of("isRegistered(string)")
        );
    }

    #[test]
    fn test_register_calldata() {
        let calldata = IUserRegistration::registerCall {
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        }
        .abi_encode();

        assert_eq!(
            &calldata[..4],
            &IUserRegistration::registerCall::SELECTOR[..]
        );
        // Two offsets, then a length word and one data word per string.
        assert_eq!(calldata.len(), 4 + 32 * 6);
    }
}
