use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::prelude::*;

use crate::config::{self, LogFormat};

/// Installs the global subscriber. Records go to stderr so the report on
/// stdout stays machine-readable.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let directives = filter_directives(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("off"));

    let json = config::log_format() == LogFormat::Json;

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .fmt_fields(JsonFields::default())
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

/// --verbose wins over RUST_LOG. Without either, logging is off so stderr
/// carries nothing but the `Error:` line.
fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "crate_version=debug".to_string();
    }

    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "off".to_string())
}
