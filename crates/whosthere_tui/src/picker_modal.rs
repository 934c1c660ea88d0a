//! Theme picker modal: a registered list and hint line around a
//! [ThemePicker], driven by key events.
//!
//! The list rows are rebuilt from [ThemePicker::entries] after every action,
//! so the `(current)` marker follows the live theme during preview.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};
use whosthere_theme::{PickerAction, PickerEntry, PickerOutcome, ThemeManager, ThemePicker};

use crate::handle::UiHandle;
use crate::widgets::{lock, registered, ListView, Shared, TextView};

pub const PICKER_TITLE: &str = " Theme Picker - Preview themes live ";
pub const PICKER_HINT: &str = "j/k: navigate | Enter: apply | Shift+Enter: save to config | Esc: cancel";

/// Width that fits the hint line plus the border.
pub const PICKER_WIDTH: u16 = 76;

/// Persists a theme name (wired to the config file by the binary).
pub type SaveTheme = Arc<dyn Fn(&str) -> anyhow::Result<()> + Send + Sync>;

pub struct PickerModal {
    picker: ThemePicker,
    list: Shared<ListView>,
    footer: Shared<TextView>,
}

impl PickerModal {
    /// Results are reported as transient status through `ui`. Without
    /// `save_theme`, save still applies the theme but persists nothing.
    pub fn new(manager: Arc<ThemeManager>, ui: UiHandle, save_theme: Option<SaveTheme>) -> Self {
        let list = registered(&manager, ListView::new(PICKER_TITLE));
        let footer = registered(&manager, TextView::new(PICKER_HINT).centered());
        let mut picker = ThemePicker::new(manager);

        let select_ui = ui.clone();
        picker.on_select(move |name| {
            let status = format!("Theme: {name}");
            select_ui.queue_update(move |state| state.set_status(status));
        });

        let save_ui = ui.clone();
        picker.on_save(move |name| {
            let status = match save_theme.as_ref() {
                Some(save) => match save(name) {
                    Ok(()) => {
                        info!(theme = name, "theme saved to config");
                        format!("Saved theme '{name}' to config")
                    }
                    Err(e) => {
                        warn!(theme = name, error = %e, "failed to save theme");
                        format!("Failed to save theme: {e}")
                    }
                },
                None => {
                    warn!(theme = name, "no config store; theme not saved");
                    format!("Theme: {name} (not saved)")
                }
            };
            save_ui.queue_update(move |state| state.set_status(status));
        });

        picker.on_cancel(move || {
            ui.queue_update(|state| state.set_status("Theme change cancelled"));
        });

        Self {
            picker,
            list,
            footer,
        }
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_browsing()
    }

    /// Open the modal. Already open: no-op.
    pub fn open(&mut self) {
        self.picker.show();
        self.sync_list();
    }

    /// Feed one key. Keys the picker does not use are ignored. An error is a
    /// broken catalog invariant and should end the run.
    pub fn handle_key(&mut self, key: KeyEvent) -> whosthere_theme::Result<Option<PickerOutcome>> {
        let Some(action) = action_for_key(key) else {
            return Ok(None);
        };
        let outcome = self.picker.handle(action)?;
        self.sync_list();
        Ok(outcome)
    }

    pub fn list(&self) -> &Shared<ListView> {
        &self.list
    }

    pub fn footer(&self) -> &Shared<TextView> {
        &self.footer
    }

    /// Rows plus border plus hint line.
    pub fn height(&self) -> u16 {
        let rows = lock(&self.list).items().len();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(3)
    }

    fn sync_list(&self) {
        let entries = self.picker.entries();
        let mut list = lock(&self.list);
        list.set_items(entries.iter().map(PickerEntry::label).collect());
        list.select(self.picker.selected());
    }
}

/// Map a key to a picker action: `j`/Down, `k`/Up, Enter, Shift+Enter, Esc/`q`.
pub fn action_for_key(key: KeyEvent) -> Option<PickerAction> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(PickerAction::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(PickerAction::Up),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => Some(PickerAction::Save),
        KeyCode::Enter => Some(PickerAction::Commit),
        KeyCode::Esc | KeyCode::Char('q') => Some(PickerAction::Cancel),
        _ => None,
    }
}
