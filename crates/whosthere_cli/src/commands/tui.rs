//! `whosthere` (no command) — run the interactive TUI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;
use whosthere_constant::SPLASH_DELAY;
use whosthere_observability::{init, LogSink, ObservabilityConfig};
use whosthere_theme::{global, ThemeCatalog, ThemeManager};
use whosthere_tui::{run_tui, schedule_main_page, ui_channel, SaveTheme, TuiOptions};

use super::ensure_known_theme;
use crate::config::{self, resolve_theme, AppConfig};
use crate::output;

pub async fn handle(config_path: PathBuf, theme: Option<String>, verbose: bool) -> Result<()> {
    // The TUI owns the terminal: logs go to the log screen (Ctrl+D), not stderr.
    let (log_tx, log_rx) = mpsc::unbounded_channel::<String>();
    let log_sink: LogSink = Arc::new(move |line: String| {
        let _ = log_tx.send(line);
    });
    let mut obs_config = ObservabilityConfig::from_env()
        .with_console(false)
        .with_log_sink(log_sink);
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {e}"));
    }

    let app_config = AppConfig::load(&config_path)?;
    let manager = Arc::new(ThemeManager::new(ThemeCatalog::builtin()));
    let theme = resolve_theme(theme.as_deref(), &app_config, manager.catalog());
    ensure_known_theme(manager.catalog(), &theme)?;
    manager.set_theme(&theme)?;
    global::install(Arc::clone(&manager));
    info!(theme = %theme, config = %config_path.display(), "starting tui");

    let save_path = config_path.clone();
    let save_theme: SaveTheme = Arc::new(move |name: &str| -> Result<()> {
        config::save_theme(&save_path, name)?;
        Ok(())
    });

    let (ui, queue) = ui_channel();
    let splash = schedule_main_page(ui.clone(), SPLASH_DELAY);
    let options = TuiOptions {
        manager,
        save_theme: Some(save_theme),
        log_rx: Some(log_rx),
    };
    let result = tokio::task::spawn_blocking(move || run_tui(options, ui, queue)).await?;
    splash.abort();
    result
}
