//! Theme catalog: ordered, name-keyed collection of every selectable theme.

use std::collections::HashMap;
use std::sync::Arc;

use crate::builtin::builtin_themes;
use crate::error::{Result, ThemeError};
use crate::theme::Theme;

/// Read-only after construction. Enumeration order is insertion order and is
/// what the picker lists; lookup by name is a hash lookup.
#[derive(Debug, Clone, Default)]
pub struct ThemeCatalog {
    themes: Vec<Arc<Theme>>,
    index: HashMap<String, usize>,
}

impl ThemeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the built-in themes.
    pub fn builtin() -> Self {
        builtin_themes()
            .into_iter()
            .fold(Self::new(), |catalog, theme| catalog.with_theme(theme))
    }

    /// Add a theme. Returns `self` for chaining. A theme whose name is already
    /// present replaces that entry and keeps its position.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        let theme = Arc::new(theme);
        match self.index.get(theme.name()) {
            Some(&pos) => self.themes[pos] = theme,
            None => {
                self.index.insert(theme.name().to_string(), self.themes.len());
                self.themes.push(theme);
            }
        }
        self
    }

    /// Look up a theme by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<Theme>> {
        self.index
            .get(name)
            .map(|&pos| Arc::clone(&self.themes[pos]))
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Theme names in enumeration order. Stable across calls.
    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
