//! `whosthere themes` — list the catalog.

use std::path::Path;

use anyhow::Result;
use whosthere_theme::ThemeCatalog;

use super::ensure_known_theme;
use crate::config::{resolve_theme, AppConfig};
use crate::output::{self, ThemeRow};

pub fn handle(config_path: &Path, theme: Option<&str>) -> Result<()> {
    let config = AppConfig::load(config_path)?;
    let catalog = ThemeCatalog::builtin();
    let active = resolve_theme(theme, &config, &catalog);
    ensure_known_theme(&catalog, &active)?;
    output::themes_table(&theme_rows(&catalog, &active));
    Ok(())
}

fn theme_rows(catalog: &ThemeCatalog, active: &str) -> Vec<ThemeRow> {
    catalog
        .names()
        .into_iter()
        .map(|name| ThemeRow {
            configured: name == active,
            name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_catalog_order() {
        let rows = theme_rows(&ThemeCatalog::builtin(), "solarized");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["default", "dark", "light", "solarized", "gruvbox", "nord"]);
        let marked: Vec<&str> = rows.iter().filter(|r| r.configured).map(|r| r.name.as_str()).collect();
        assert_eq!(marked, ["solarized"]);
    }

    #[test]
    fn unknown_theme_flag_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let err = handle(&path, Some("neon")).unwrap_err();
        assert!(err.to_string().starts_with("unknown theme: neon (available: default,"));
    }

    #[test]
    fn unknown_configured_theme_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme":"neon"}"#).unwrap();
        assert!(handle(&path, None).is_ok());
    }
}
