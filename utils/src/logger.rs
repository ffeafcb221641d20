use anyhow::Result;
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

/// Installs the global subscriber writing to `writer`.
///
/// `log_format` is "json", "node" (compact) or anything else for the full
/// format. `RUST_LOG` wins over the default `info` filter.
pub fn setup_tracing<W>(log_format: &str, node_name: String, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        "json" => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        "node" => registry
            .with(fmt::layer().compact().with_target(false).with_writer(writer))
            .try_init()?,
        _ => registry.with(fmt::layer().with_writer(writer)).try_init()?,
    }

    tracing::debug!(node = %node_name, "tracing ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installs_once() {
        setup_tracing("node", "test".to_string(), std::io::sink).unwrap();
        assert!(setup_tracing("json", "test".to_string(), std::io::sink).is_err());
    }
}
