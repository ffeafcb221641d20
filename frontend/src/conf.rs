use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Conf {
    pub id: String,
    /// The log format to use - "json", "node" or "full" (default)
    pub log_format: String,
    /// Wallet standing in for the browser-injected provider. Absent means no wallet.
    pub wallet: Option<WalletConf>,
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct WalletConf {
    /// JSON-RPC endpoint of the chain both contracts live on.
    pub rpc_url: String,
    /// Hex-encoded secp256k1 key used to sign transactions.
    pub private_key: String,
}

impl fmt::Debug for WalletConf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConf")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl Conf {
    pub fn new(config_files: Vec<String>) -> Result<Self, anyhow::Error> {
        let mut s = Config::builder().add_source(File::from_str(
            include_str!("conf_defaults.toml"),
            config::FileFormat::Toml,
        ));
        // Priority order: config file, then environment variables
        for config_file in config_files {
            s = s.add_source(File::with_name(&config_file).required(false));
        }
        let conf: Self = s
            .add_source(
                Environment::with_prefix("frontend")
                    .separator("__")
                    .prefix_separator("_"),
            )
            .build()?
            .try_deserialize()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_wallet() {
        let conf = Conf::new(vec!["does-not-exist.toml".to_string()]).unwrap();
        assert_eq!(conf.id, "frontend");
        assert_eq!(conf.log_format, "full");
        assert!(conf.wallet.is_none());
    }

    #[test]
    fn test_private_key_is_not_printed() {
        let wallet = WalletConf {
            rpc_url: "http://localhost:8545".to_string(),
            private_key: "0xdeadbeef".to_string(),
        };
        let printed = format!("{wallet:?}");
        assert!(printed.contains("http://localhost:8545"));
        assert!(!printed.contains("deadbeef"));
    }
}
