use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AnalyzerConfig;

/// Installs structured logging for a host process.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `config.rust_log`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &AnalyzerConfig) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

fn build_filter(config: &AnalyzerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), config.rust_log))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_already_installed() {
        let config = AnalyzerConfig::default();
        // Whichever call wins, a repeat must not panic and must report false.
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
