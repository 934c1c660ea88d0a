//! Global tracing subscriber initialization.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

// Set once the global subscriber is installed.
static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global subscriber described by `config`.
///
/// Layers: env filter, optional console fmt layer (stderr), optional log sink.
/// Calling this again after a successful init is a no-op.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    if INITIALIZED.get().is_some() {
        tracing::debug!("observability already initialized");
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.effective_log_level())
        .map_err(|e| ObservabilityError::Config(e.to_string()))?;

    // Build layers first (build separately, then compose once to avoid type mismatch)
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let sink_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let _ = INITIALIZED.set(());
    tracing::debug!(
        log_level = config.effective_log_level(),
        console = config.enable_console,
        sink = config.log_sink.is_some(),
        "tracing initialized"
    );
    Ok(())
}
