use alloy::{primitives::U256, sol};
use anyhow::{ensure, Context, Result};

pub mod client;

sol! {
    /// Interface descriptor of the deployed key/value data-storage contract.
    #[sol(rpc)]
    interface IDataStorage {
        function writeData(string calldata data) external;
        function getData(uint256 id) external view returns (string);
        function updateData(uint256 id, string calldata newData) external;
        function deleteData(uint256 id) external;
    }
}

/// Parses a record identifier typed by the user, either decimal or `0x` hex.
/// Surrounding whitespace is ignored.
pub fn parse_data_id(id: &str) -> Result<U256> {
    let trimmed = id.trim();
    ensure!(!trimmed.is_empty(), "empty data id");
    trimmed
        .parse::<U256>()
        .with_context(|| format!("invalid data id {id:?}"))
}
