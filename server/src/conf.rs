use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Conf {
    pub id: String,
    /// The log format to use - "json", "node" or "full" (default)
    pub log_format: String,
    /// Listening port. A non-empty `PORT` variable wins over every other source.
    pub port: u16,
}

impl Conf {
    pub fn new(config_files: Vec<String>) -> Result<Self, anyhow::Error> {
        Self::with_port_override(config_files, env::var("PORT").ok())
    }

    pub fn with_port_override(
        config_files: Vec<String>,
        port: Option<String>,
    ) -> Result<Self, anyhow::Error> {
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
                Environment::with_prefix("hello")
                    .separator("__")
                    .prefix_separator("_"),
            )
            .set_override_option("port", port.filter(|p| !p.is_empty()))?
            .build()?
            .try_deserialize()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let conf = Conf::with_port_override(vec![], None).unwrap();
        assert_eq!(conf.port, 3000);
        assert_eq!(conf.log_format, "full");
    }

    #[test]
    fn test_port_override() {
        let conf = Conf::with_port_override(vec![], Some("8080".to_string())).unwrap();
        assert_eq!(conf.port, 8080);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let conf = Conf::with_port_override(vec![], Some(String::new())).unwrap();
        assert_eq!(conf.port, 3000);
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(Conf::with_port_override(vec![], Some("not-a-port".to_string())).is_err());
    }
}
