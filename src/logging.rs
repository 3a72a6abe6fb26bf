//! Logging configuration.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only the status
//! lines from [`crate::report`].

use tracing_subscriber::EnvFilter;

/// Initializes logging on stderr.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or everything
/// from this crate at debug level when `verbose` is set.
pub fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,supabase_sql_runner=debug,sql_runner=debug,gen_icons=debug")
    } else {
        EnvFilter::new("warn")
    }
}
