//! Theme picker: modal browse / live-preview / commit-or-rollback state machine.
//!
//! ```text
//! Idle ──show──▶ Browsing ──commit──▶ Closed(Committed)
//!                   │  ▲   ──save────▶ Closed(Saved)
//!              up/down │   ──cancel──▶ Closed(Cancelled)
//!                   └──┘
//! ```
//!
//! Moving the selection *is* the preview: every move calls
//! [ThemeManager::set_theme]. Commit and save leave the previewed theme in
//! place; cancel restores the theme that was current when the picker opened.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::Result;
use crate::manager::ThemeManager;

type NameCallback = Box<dyn FnMut(&str) + Send>;
type CancelCallback = Box<dyn FnMut() + Send>;

/// Input the picker understands, already decoded from key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerAction {
    Down,
    Up,
    /// Apply the selected theme for this run.
    Commit,
    /// Apply and persist the selected theme.
    Save,
    /// Roll back to the theme current before the picker opened.
    Cancel,
}

/// How a picker session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerOutcome {
    Committed(String),
    Saved(String),
    Cancelled,
}

/// Per-session state, created by [ThemePicker::show].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerSession {
    /// Current theme when the session started; `None` if no theme was ever set.
    pub original_theme: Option<String>,
    pub browse_index: usize,
    pub theme_names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    Browsing(PickerSession),
    Closed(PickerOutcome),
}

/// One row of the picker list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    /// This theme is the manager's live current theme.
    pub is_current: bool,
    /// The browse cursor is on this row.
    pub is_selected: bool,
}

impl PickerEntry {
    /// Display text: `● name (current)` for the current theme, `name` otherwise.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("● {} (current)", self.name)
        } else {
            self.name.clone()
        }
    }
}

pub struct ThemePicker {
    manager: Arc<ThemeManager>,
    state: PickerState,
    on_select: Option<NameCallback>,
    on_save: Option<NameCallback>,
    on_cancel: Option<CancelCallback>,
}

impl ThemePicker {
    pub fn new(manager: Arc<ThemeManager>) -> Self {
        Self {
            manager,
            state: PickerState::Idle,
            on_select: None,
            on_save: None,
            on_cancel: None,
        }
    }

    /// Called with the theme name on commit (Enter).
    pub fn on_select(&mut self, f: impl FnMut(&str) + Send + 'static) {
        self.on_select = Some(Box::new(f));
    }

    /// Called with the theme name on save (Shift+Enter). Wire this to config persistence.
    pub fn on_save(&mut self, f: impl FnMut(&str) + Send + 'static) {
        self.on_save = Some(Box::new(f));
    }

    /// Called after rollback on cancel (Esc).
    pub fn on_cancel(&mut self, f: impl FnMut() + Send + 'static) {
        self.on_cancel = Some(Box::new(f));
    }

    /// Open the picker: snapshot the current theme for rollback and list the
    /// catalog with the cursor on the current theme. Already browsing: no-op.
    pub fn show(&mut self) {
        if self.is_browsing() {
            debug!("theme picker already open");
            return;
        }
        let original_theme = self.manager.current();
        let theme_names = self.manager.catalog().names();
        let browse_index = original_theme
            .as_deref()
            .and_then(|current| theme_names.iter().position(|n| n == current))
            .unwrap_or(0);
        debug!(
            original = original_theme.as_deref().unwrap_or(""),
            themes = theme_names.len(),
            "theme picker opened"
        );
        self.state = PickerState::Browsing(PickerSession {
            original_theme,
            browse_index,
            theme_names,
        });
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_browsing(&self) -> bool {
        matches!(self.state, PickerState::Browsing(_))
    }

    fn session(&self) -> Option<&PickerSession> {
        match &self.state {
            PickerState::Browsing(session) => Some(session),
            _ => None,
        }
    }

    /// Browse cursor position while browsing.
    pub fn selected(&self) -> Option<usize> {
        self.session().map(|s| s.browse_index)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.session()
            .and_then(|s| s.theme_names.get(s.browse_index))
            .map(String::as_str)
    }

    /// Rows to render. The current marker follows the manager's live theme,
    /// not the session's original. Empty unless browsing.
    pub fn entries(&self) -> Vec<PickerEntry> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        let current = self.manager.current();
        session
            .theme_names
            .iter()
            .enumerate()
            .map(|(i, name)| PickerEntry {
                name: name.clone(),
                is_current: current.as_deref() == Some(name.as_str()),
                is_selected: i == session.browse_index,
            })
            .collect()
    }

    /// Feed one action. Returns the outcome when the action ends the session.
    ///
    /// An error means the picker's name list and the catalog disagree; callers
    /// should treat it as fatal.
    pub fn handle(&mut self, action: PickerAction) -> Result<Option<PickerOutcome>> {
        let PickerState::Browsing(session) = &mut self.state else {
            return Ok(None);
        };

        match action {
            PickerAction::Down | PickerAction::Up => {
                let next = match action {
                    PickerAction::Down if session.browse_index + 1 < session.theme_names.len() => {
                        session.browse_index + 1
                    }
                    PickerAction::Up if session.browse_index > 0 => session.browse_index - 1,
                    _ => return Ok(None),
                };
                session.browse_index = next;
                let name = session.theme_names[next].clone();
                self.preview(&name)?;
                Ok(None)
            }
            PickerAction::Commit => {
                let Some(name) = session.theme_names.get(session.browse_index).cloned() else {
                    return Ok(None);
                };
                info!(theme = %name, "theme committed");
                self.state = PickerState::Closed(PickerOutcome::Committed(name.clone()));
                if let Some(cb) = self.on_select.as_mut() {
                    cb(&name);
                }
                Ok(Some(PickerOutcome::Committed(name)))
            }
            PickerAction::Save => {
                let Some(name) = session.theme_names.get(session.browse_index).cloned() else {
                    return Ok(None);
                };
                info!(theme = %name, "theme saved");
                self.state = PickerState::Closed(PickerOutcome::Saved(name.clone()));
                if let Some(cb) = self.on_save.as_mut() {
                    cb(&name);
                }
                Ok(Some(PickerOutcome::Saved(name)))
            }
            PickerAction::Cancel => {
                // Without an original theme there is nothing to restore, so the
                // last preview stays applied.
                if let Some(original) = session.original_theme.clone() {
                    self.preview(&original)?;
                }
                info!("theme picker cancelled");
                self.state = PickerState::Closed(PickerOutcome::Cancelled);
                if let Some(cb) = self.on_cancel.as_mut() {
                    cb();
                }
                Ok(Some(PickerOutcome::Cancelled))
            }
        }
    }

    fn preview(&self, name: &str) -> Result<()> {
        debug!(theme = name, "theme preview");
        self.manager.set_theme(name).map(|_| ()).inspect_err(|e| {
            error!(theme = name, error = %e, "picker theme list out of sync with catalog");
        })
    }
}

impl fmt::Debug for ThemePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePicker")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
