//! Error types for theme operations.

use thiserror::Error;

/// Errors raised by the theme catalog and manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No theme with this name exists in the catalog.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
