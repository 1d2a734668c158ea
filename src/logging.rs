// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the CLI.
//
// Logs go to stderr so that --json output on stdout stays machine-readable.
// RUST_LOG wins over the default filter when it is set.
// =============================================================================

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber; later calls do nothing
///
/// Parameters:
///   verbose: use "debug" instead of "info" as the default filter
pub fn init_tracing(verbose: bool) {
    INITIALIZED.get_or_init(|| {
        let default_filter = if verbose { "debug" } else { "info" };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        // try_init fails if a test harness already installed a subscriber
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
        tracing::debug!("still alive");
    }
}
