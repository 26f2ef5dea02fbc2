use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

pub fn build_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter {:?}", directives))
}

/// Installs the global compact fmt subscriber
pub fn init_tracing(directives: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives)?)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_directives() {
        assert!(build_filter(crate::config::DEFAULT_LOG_FILTER).is_ok());
        assert!(build_filter("debug,hyper=warn").is_ok());
    }
}
