//! Diagnostic logging
//!
//! Everything goes to stderr; stdout carries only the greeting.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from the verbosity flag alone; `RUST_LOG` is ignored.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // A second call (e.g. from tests) keeps the first subscriber.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
