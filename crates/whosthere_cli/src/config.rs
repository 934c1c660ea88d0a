//! Persisted configuration: a small JSON document in the user config dir.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use whosthere_constant::app::{CONFIG_DIR, CONFIG_ENV, CONFIG_FILE};
use whosthere_constant::DEFAULT_THEME;
use whosthere_theme::ThemeCatalog;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no config directory found; pass --config or set WHOSTHERE_CONFIG")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// On-disk settings. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl AppConfig {
    /// Read `path`. A missing file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the whole document to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json + "\n").map_err(io_err)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// Load, set the theme, save. Used by the picker's save action and `config set-theme`.
pub fn save_theme(path: &Path, theme: &str) -> Result<()> {
    let mut config = AppConfig::load(path)?;
    config.theme = Some(theme.to_string());
    config.save(path)
}

/// Config file location: `--config`, then `$WHOSTHERE_CONFIG`, then the user config dir.
pub fn config_path(flag: Option<&Path>) -> Result<PathBuf> {
    resolve_config_path(flag, std::env::var_os(CONFIG_ENV), dirs::config_dir())
}

fn resolve_config_path(
    flag: Option<&Path>,
    env: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Startup theme: `--theme`, then the config file, then [DEFAULT_THEME].
///
/// An unknown configured name falls back to the default with a warning; an
/// unknown `--theme` is returned as-is; commands reject it through
/// `commands::ensure_known_theme`.
pub fn resolve_theme(flag: Option<&str>, config: &AppConfig, catalog: &ThemeCatalog) -> String {
    if let Some(name) = flag {
        return name.to_string();
    }
    match config.theme.as_deref() {
        Some(name) if catalog.contains(name) => name.to_string(),
        Some(name) => {
            warn!(theme = name, fallback = DEFAULT_THEME, "unknown theme in config");
            DEFAULT_THEME.to_string()
        }
        None => DEFAULT_THEME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_creates_dirs_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/whosthere/config.json");
        save_theme(&path, "gruvbox").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.theme.as_deref(), Some("gruvbox"));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"theme\": \"gruvbox\""));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme":"nord","scan_interval":5}"#).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().theme.as_deref(), Some("nord"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ theme").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().starts_with("invalid config at"));
    }

    #[test]
    fn path_precedence() {
        let flag = PathBuf::from("/flag.json");
        let env = OsString::from("/env.json");
        let dir = PathBuf::from("/home/u/.config");

        assert_eq!(
            resolve_config_path(Some(&flag), Some(env.clone()), Some(dir.clone())).unwrap(),
            flag
        );
        assert_eq!(
            resolve_config_path(None, Some(env), Some(dir.clone())).unwrap(),
            PathBuf::from("/env.json")
        );
        assert_eq!(
            resolve_config_path(None, Some(OsString::new()), Some(dir)).unwrap(),
            PathBuf::from("/home/u/.config/whosthere/config.json")
        );
        assert!(matches!(
            resolve_config_path(None, None, None),
            Err(ConfigError::NoConfigDir)
        ));
    }

    #[test]
    fn theme_precedence_and_fallback() {
        let catalog = ThemeCatalog::builtin();
        let configured = AppConfig {
            theme: Some("nord".to_string()),
        };
        let bogus = AppConfig {
            theme: Some("neon".to_string()),
        };

        assert_eq!(resolve_theme(Some("dark"), &configured, &catalog), "dark");
        assert_eq!(resolve_theme(None, &configured, &catalog), "nord");
        assert_eq!(resolve_theme(None, &bogus, &catalog), DEFAULT_THEME);
        assert_eq!(resolve_theme(None, &AppConfig::default(), &catalog), DEFAULT_THEME);
    }
}
