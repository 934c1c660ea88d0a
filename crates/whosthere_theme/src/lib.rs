//! whosthere-theme — theme coordination for the whosthere TUI.
//!
//! - [ThemeCatalog] — ordered, read-only set of named [Theme]s.
//! - [capability] — narrow style traits widgets implement in any combination,
//!   collected per widget kind into [Capabilities].
//! - [ThemeManager] — current theme plus a weak registry of widgets; a theme
//!   change is broadcast to every live widget.
//! - [ThemePicker] — interactive browse / preview / commit / rollback on top
//!   of the manager.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use whosthere_theme::{Background, Capabilities, Rgb, ThemeCatalog, ThemeManager};
//!
//! struct Pane { bg: Rgb }
//! impl Background for Pane {
//!     fn set_background_color(&mut self, color: Rgb) { self.bg = color; }
//! }
//!
//! let manager = ThemeManager::new(ThemeCatalog::builtin());
//! let pane = Arc::new(Mutex::new(Pane { bg: Rgb::default() }));
//! manager.register_with(&pane, Capabilities::none().with_background());
//! let theme = manager.set_theme("nord")?;
//! assert_eq!(pane.lock().unwrap().bg, theme.palette().primitive_background);
//! # Ok::<(), whosthere_theme::ThemeError>(())
//! ```

mod builtin;
pub mod capability;
mod catalog;
mod error;
pub mod global;
mod manager;
mod picker;
mod rgb;
mod theme;

pub use builtin::{builtin_themes, BUILTIN_THEMES};
pub use capability::{
    Background, Bordered, Capabilities, FieldColorable, FieldColors, Labeled, ListColorable,
    ListColors, TextDisplay, Themeable, Titled,
};
pub use catalog::ThemeCatalog;
pub use error::{Result, ThemeError};
pub use manager::{ThemeManager, WidgetId};
pub use picker::{PickerAction, PickerEntry, PickerOutcome, PickerSession, PickerState, ThemePicker};
pub use rgb::Rgb;
pub use theme::{Palette, Theme};
