//! TUI state: current page and screen, pages, picker modal, status, log lines.
//!
//! [AppState] is owned by the UI loop. Other threads change it only through
//! [crate::UiHandle::queue_update].

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;
use whosthere_theme::ThemeManager;

use crate::handle::UiHandle;
use crate::pages::{MainPage, SplashPage};
use crate::picker_modal::{PickerModal, SaveTheme};
use crate::widgets::{lock, registered, Shared, TextView};

/// Which page is shown on the app screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Splash,
    Main,
}

/// Which screen is currently shown (pages vs captured logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Pages,
    Logs,
}

/// Max log lines to keep (older lines dropped).
pub const MAX_TRACE_LINES: usize = 2000;

pub const LOGS_TITLE: &str = " Logs (Ctrl+D to close) ";

pub struct AppState {
    pub manager: Arc<ThemeManager>,
    pub page: Page,
    pub screen: Screen,
    pub splash: SplashPage,
    pub main: MainPage,
    pub picker: PickerModal,
    /// Framed view backing the log screen.
    pub log_view: Shared<TextView>,
    /// Transient status shown in the main page footer.
    pub status: String,
    pub status_set_at: Option<Instant>,
    /// Captured log lines. Newest at end.
    pub trace_lines: Vec<String>,
    /// Lines scrolled up from the bottom of the log screen.
    pub trace_scroll: usize,
    /// When true, next tick draws; cleared after draw.
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl AppState {
    /// Build every page and the picker modal. All widgets are registered with
    /// `manager` here, so they are styled if a theme is already current.
    pub fn new(manager: Arc<ThemeManager>, ui: &UiHandle, save_theme: Option<SaveTheme>) -> Self {
        let splash = SplashPage::new(&manager);
        let main = MainPage::new(&manager);
        let picker = PickerModal::new(Arc::clone(&manager), ui.clone(), save_theme);
        let log_view = registered(&manager, TextView::new("").framed(LOGS_TITLE));
        Self {
            manager,
            page: Page::Splash,
            screen: Screen::Pages,
            splash,
            main,
            picker,
            log_view,
            status: String::new(),
            status_set_at: None,
            trace_lines: Vec::new(),
            trace_scroll: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn switch_to(&mut self, page: Page) {
        if self.page != page {
            debug!(?page, "switching page");
            self.page = page;
            self.needs_redraw = true;
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Clear the status once it is older than `timeout`. Returns true if cleared.
    pub fn clear_expired_status(&mut self, timeout: Duration) -> bool {
        match self.status_set_at {
            Some(set_at) if set_at.elapsed() >= timeout => {
                self.status.clear();
                self.status_set_at = None;
                self.needs_redraw = true;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_logs(&mut self) {
        self.screen = match self.screen {
            Screen::Pages => Screen::Logs,
            Screen::Logs => Screen::Pages,
        };
        self.needs_redraw = true;
    }

    /// Append a log line, dropping the oldest beyond [MAX_TRACE_LINES].
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    /// Whether the main page filter has keyboard focus.
    pub fn filter_focused(&self) -> bool {
        lock(&self.main.filter).is_focused()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use whosthere_theme::ThemeCatalog;

    pub fn test_state(ui: &UiHandle) -> AppState {
        let manager = Arc::new(ThemeManager::new(ThemeCatalog::builtin()));
        manager.set_theme("default").unwrap();
        AppState::new(manager, ui, None)
    }

    #[test]
    fn starts_on_splash() {
        let (ui, _queue) = crate::ui_channel();
        let state = test_state(&ui);
        assert_eq!(state.page, Page::Splash);
        assert_eq!(state.screen, Screen::Pages);
        assert!(state.needs_redraw);
        assert!(!state.picker.is_open());
    }

    #[test]
    fn pages_register_their_widgets() {
        let (ui, _queue) = crate::ui_channel();
        let state = test_state(&ui);
        // logo, title, devices, filter, footer, picker list and hint, log view
        assert_eq!(state.manager.len(), 8);
        drop(state);
    }

    #[test]
    fn trace_lines_capped() {
        let (ui, _queue) = crate::ui_channel();
        let mut state = test_state(&ui);
        for i in 0..MAX_TRACE_LINES + 5 {
            state.push_trace_line(format!("line {i}"));
        }
        assert_eq!(state.trace_lines.len(), MAX_TRACE_LINES);
        assert_eq!(state.trace_lines[0], "line 5");
    }

    #[test]
    fn status_expires() {
        let (ui, _queue) = crate::ui_channel();
        let mut state = test_state(&ui);
        state.set_status("Saved");
        assert!(!state.clear_expired_status(Duration::from_secs(60)));
        assert_eq!(state.status, "Saved");
        assert!(state.clear_expired_status(Duration::ZERO));
        assert!(state.status.is_empty());
    }

    #[test]
    fn toggle_logs_round_trips() {
        let (ui, _queue) = crate::ui_channel();
        let mut state = test_state(&ui);
        state.toggle_logs();
        assert_eq!(state.screen, Screen::Logs);
        state.toggle_logs();
        assert_eq!(state.screen, Screen::Pages);
    }

    #[test]
    fn trace_scroll_saturates() {
        let (ui, _queue) = crate::ui_channel();
        let mut state = test_state(&ui);
        state.trace_scroll_down(3);
        assert_eq!(state.trace_scroll, 0);
        state.trace_scroll_up(4);
        state.trace_scroll_down(1);
        assert_eq!(state.trace_scroll, 3);
    }
}
