//! Optional process-wide accessor over an explicitly constructed manager.
//!
//! Nothing in this crate depends on it; it only saves passing the manager to
//! code that builds widgets far from the application root. Tests should use
//! their own [ThemeManager] instead.

use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;

use crate::capability::Themeable;
use crate::manager::{ThemeManager, WidgetId};

static GLOBAL_MANAGER: OnceCell<Arc<ThemeManager>> = OnceCell::new();

/// Install `manager` as the process-wide instance. Returns false (and leaves
/// the existing one in place) if one was already installed.
pub fn install(manager: Arc<ThemeManager>) -> bool {
    GLOBAL_MANAGER.set(manager).is_ok()
}

/// Register `widget` with the installed manager. Does nothing when none is
/// installed.
pub fn register_widget<W>(widget: &Arc<Mutex<W>>) -> Option<WidgetId>
where
    W: Themeable + Send + 'static,
{
    GLOBAL_MANAGER.get().map(|m| m.register(widget))
}
