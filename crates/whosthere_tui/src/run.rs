//! TUI run loop: terminal setup, event handling, queued updates, draw.
//!
//! Terminal events are read in a dedicated thread so the loop never blocks on
//! input; each tick the loop drains log lines and [crate::UiQueue] tasks,
//! redraws if anything changed, then waits briefly for the next event.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, KeyboardEnhancementFlags, MouseEventKind, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};
use whosthere_theme::ThemeManager;

use crate::handle::{UiHandle, UiQueue};
use crate::picker_modal::SaveTheme;
use crate::state::{AppState, Page, Screen};
use crate::view;
use crate::widgets::lock;

const TICK: Duration = Duration::from_millis(50);
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// What the shell needs from the binary.
pub struct TuiOptions {
    pub manager: Arc<ThemeManager>,
    /// Persists the picker's save action; `None` disables persistence.
    pub save_theme: Option<SaveTheme>,
    /// Formatted log lines for the log screen (Ctrl+D).
    pub log_rx: Option<UnboundedReceiver<String>>,
}

/// Run the TUI until quit: alternate screen, raw mode, event loop.
///
/// `ui` and `queue` come from [crate::ui_channel]; keep clones of `ui` for
/// background tasks (e.g. [crate::schedule_main_page]).
pub fn run_tui(options: TuiOptions, ui: UiHandle, queue: UiQueue) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Needed to tell Shift+Enter from Enter.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(options.manager, &ui, options.save_theme);
    state.push_trace_line("[log] TUI started. Ctrl+D toggles this screen.".to_string());
    let result = run_loop(&mut terminal, &mut state, queue, options.log_rx);

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    mut queue: UiQueue,
    mut log_rx: Option<UnboundedReceiver<String>>,
) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader_stop = Arc::clone(&stop);
    let reader = std::thread::spawn(move || {
        while !reader_stop.load(Ordering::Relaxed) {
            if event::poll(TICK).unwrap_or(false)
                && let Ok(ev) = event::read()
                && event_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    let result = loop {
        if let Some(rx) = log_rx.as_mut() {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        queue.drain(state);
        state.clear_expired_status(STATUS_TIMEOUT);

        if state.should_quit {
            break Ok(());
        }

        if state.needs_redraw {
            if let Err(e) = terminal.draw(|f| view::draw(f, state)) {
                break Err(e.into());
            }
            state.needs_redraw = false;
        }

        match event_rx.recv_timeout(TICK) {
            Ok(ev) => {
                if let Err(e) = handle_event(state, ev) {
                    break Err(e);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    stop.store(true, Ordering::Relaxed);
    let _ = reader.join();
    info!("tui exited");
    result
}

/// Apply one terminal event to the state. Errors are fatal to the run loop.
pub fn handle_event(state: &mut AppState, event: Event) -> anyhow::Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key)?,
        Event::Resize(_, _) => state.needs_redraw = true,
        Event::Mouse(me) if state.screen == Screen::Logs => match me.kind {
            MouseEventKind::ScrollUp => state.trace_scroll_up(3),
            MouseEventKind::ScrollDown => state.trace_scroll_down(3),
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> anyhow::Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('d') {
        state.toggle_logs();
        return Ok(());
    }
    state.needs_redraw = true;

    if state.screen == Screen::Logs {
        match key.code {
            KeyCode::Esc => state.toggle_logs(),
            KeyCode::Up | KeyCode::Char('k') => state.trace_scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => state.trace_scroll_down(1),
            KeyCode::PageUp => state.trace_scroll_up(10),
            KeyCode::PageDown => state.trace_scroll_down(10),
            _ => {}
        }
        return Ok(());
    }

    if state.picker.is_open() {
        if let Some(outcome) = state.picker.handle_key(key)? {
            debug!(?outcome, "theme picker closed");
        }
        return Ok(());
    }

    if ctrl && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(());
    }

    if state.page == Page::Splash {
        if key.code == KeyCode::Char('q') {
            state.should_quit = true;
        }
        return Ok(());
    }

    if state.filter_focused() {
        let mut filter = lock(&state.main.filter);
        match key.code {
            KeyCode::Esc | KeyCode::Enter => filter.set_focused(false),
            KeyCode::Backspace => filter.backspace(),
            KeyCode::Char(c) if !ctrl => filter.insert(c),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('t') => state.picker.open(),
        KeyCode::Char('/') => lock(&state.main.filter).set_focused(true),
        _ => {}
    }
    Ok(())
}
