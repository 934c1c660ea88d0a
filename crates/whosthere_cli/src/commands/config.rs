//! `whosthere config` subcommands.

use std::path::Path;

use anyhow::Result;
use whosthere_theme::ThemeCatalog;

use super::ensure_known_theme;
use crate::cli::ConfigAction;
use crate::config::save_theme;
use crate::output;

pub fn handle(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Path => {
            output::kv("config", &config_path.display().to_string());
            Ok(())
        }
        ConfigAction::SetTheme { name } => {
            set_theme(config_path, &name)?;
            output::success(&format!("Saved theme '{}' to {}", name, config_path.display()));
            Ok(())
        }
    }
}

fn set_theme(config_path: &Path, name: &str) -> Result<()> {
    ensure_known_theme(&ThemeCatalog::builtin(), name)?;
    save_theme(config_path, name)?;
    Ok(())
}
