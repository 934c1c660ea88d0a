//! TUI view: splash or main page, the picker modal on top, or the log screen.

use ratatui::{layout::Rect, widgets::Clear, Frame};

use crate::layouts::{centered_rect, main_splits, vertical_split};
use crate::pages::MAIN_HINT;
use crate::picker_modal::PICKER_WIDTH;
use crate::state::{AppState, Page, Screen};
use crate::widgets::lock;

/// Draw the whole frame for the current screen.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Pages => {
            match state.page {
                Page::Splash => frame.render_widget(&*lock(&state.splash.logo), area),
                Page::Main => draw_main(frame, state, area),
            }
            if state.picker.is_open() {
                draw_picker(frame, state, area);
            }
        }
    }
}

fn draw_main(frame: &mut Frame, state: &AppState, area: Rect) {
    let page = &state.main;
    let splits = main_splits(area);

    frame.render_widget(&*lock(&page.title), splits.title);

    let devices = lock(&page.devices);
    let (filter_area, _list_area) = vertical_split(devices.inner(splits.body), 1);
    frame.render_widget(&*devices, splits.body);
    frame.render_widget(&*lock(&page.filter), filter_area);

    let mut footer = lock(&page.footer);
    footer.set_text(if state.status.is_empty() {
        MAIN_HINT
    } else {
        state.status.as_str()
    });
    frame.render_widget(&*footer, splits.footer);
}

fn draw_picker(frame: &mut Frame, state: &AppState, area: Rect) {
    let modal = centered_rect(area, PICKER_WIDTH, state.picker.height());
    let (list_area, hint_area) = vertical_split(modal, modal.height.saturating_sub(1));
    frame.render_widget(Clear, modal);
    frame.render_widget(&*lock(state.picker.list()), list_area);
    frame.render_widget(&*lock(state.picker.footer()), hint_area);
}

/// Captured log lines, newest at the bottom; scrolled up by `trace_scroll`.
fn draw_logs(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let viewport = area.height.saturating_sub(2) as usize;
    let max_scroll = state.trace_lines.len().saturating_sub(viewport);
    state.trace_scroll = state.trace_scroll.min(max_scroll);
    let end = state.trace_lines.len() - state.trace_scroll;
    let start = end.saturating_sub(viewport);

    let mut view = lock(&state.log_view);
    view.set_lines(state.trace_lines[start..end].to_vec());
    frame.render_widget(&*view, area);
}
