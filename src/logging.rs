use tracing_subscriber::EnvFilter;

/// Stderr logging; `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        // a global subscriber is already set; keep it
        tracing::debug!(error = %err, "logging already initialised");
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
