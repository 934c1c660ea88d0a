//! Command dispatch.

pub mod config;
pub mod themes;
pub mod tui;

use anyhow::{anyhow, Result};
use whosthere_observability::{init, ObservabilityConfig};
use whosthere_theme::ThemeCatalog;

use crate::cli::{Cli, Command};
use crate::config::config_path;
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let path = config_path(cli.config.as_deref())?;
    match cli.command {
        None => tui::handle(path, cli.theme, cli.verbose).await,
        Some(Command::Themes) => {
            init_console_logging(cli.verbose);
            themes::handle(&path, cli.theme.as_deref())
        }
        Some(Command::Config { action }) => {
            init_console_logging(cli.verbose);
            config::handle(action, &path)
        }
    }
}

/// Reject a theme name the catalog does not have, listing the ones it does.
pub(crate) fn ensure_known_theme(catalog: &ThemeCatalog, name: &str) -> Result<()> {
    catalog
        .lookup(name)
        .map(|_| ())
        .map_err(|e| anyhow!("{e} (available: {})", catalog.names().join(", ")))
}

/// Plain commands log to stderr, warnings only unless verbose or overridden by env.
fn init_console_logging(verbose: bool) {
    let mut obs_config = ObservabilityConfig::from_env();
    if verbose {
        obs_config = obs_config.with_log_level("debug");
    } else if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level("warn");
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Logging init failed (continuing): {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_theme_passes() {
        assert!(ensure_known_theme(&ThemeCatalog::builtin(), "nord").is_ok());
    }

    #[test]
    fn unknown_theme_lists_available() {
        let err = ensure_known_theme(&ThemeCatalog::builtin(), "neon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown theme: neon (available: default, dark, light, solarized, gruvbox, nord)"
        );
    }
}
