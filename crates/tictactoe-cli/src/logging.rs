use std::{fs::File, path::Path, sync::Arc};

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The terminal is owned by the UI, so all output goes to `log_file`. The
/// filter comes from `RUST_LOG` and defaults to `info`.
pub(crate) fn init(log_file: &Path) -> anyhow::Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file: {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))
}
