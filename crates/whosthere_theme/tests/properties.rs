//! Manager and picker behavior end to end.
//!
//! Run with: cargo test -p whosthere-theme --test properties

mod common;

use std::sync::{Arc, Mutex};

use common::{expected_roles, manager, roles_of, swatch};
use whosthere_theme::{PickerAction, PickerOutcome, ThemeError, ThemePicker};

/// Records every callback the picker fires.
#[derive(Default)]
struct Calls {
    selected: Vec<String>,
    saved: Vec<String>,
    cancelled: usize,
}

fn wired_picker(manager: &Arc<whosthere_theme::ThemeManager>) -> (ThemePicker, Arc<Mutex<Calls>>) {
    let calls = Arc::new(Mutex::new(Calls::default()));
    let mut picker = ThemePicker::new(Arc::clone(manager));
    let c = Arc::clone(&calls);
    picker.on_select(move |name| c.lock().unwrap().selected.push(name.to_string()));
    let c = Arc::clone(&calls);
    picker.on_save(move |name| c.lock().unwrap().saved.push(name.to_string()));
    let c = Arc::clone(&calls);
    picker.on_cancel(move || c.lock().unwrap().cancelled += 1);
    (picker, calls)
}

#[test]
fn test_set_theme_then_current_round_trips() {
    let m = manager();
    for name in m.catalog().names() {
        let theme = m.set_theme(&name).unwrap();
        assert_eq!(theme.name(), name);
        assert_eq!(m.current(), Some(name));
    }
}

#[test]
fn test_unknown_theme_fails_and_keeps_current() {
    let m = manager();
    assert_eq!(
        m.set_theme("does-not-exist").unwrap_err(),
        ThemeError::UnknownTheme("does-not-exist".to_string())
    );
    assert_eq!(m.current(), None);

    m.set_theme("light").unwrap();
    assert!(m.set_theme("does-not-exist").is_err());
    assert_eq!(m.current().as_deref(), Some("light"));
}

#[test]
fn test_register_after_theme_styles_immediately() {
    let m = manager();
    let dark = m.set_theme("dark").unwrap();
    let w = swatch();
    m.register(&w);
    assert_eq!(roles_of(&w), expected_roles(&dark));
}

#[test]
fn test_broadcast_reaches_every_widget() {
    let m = manager();
    let widgets: Vec<_> = (0..5).map(|_| swatch()).collect();
    for w in &widgets {
        m.register(w);
    }
    let nord = m.set_theme("nord").unwrap();
    for w in &widgets {
        assert_eq!(roles_of(w), expected_roles(&nord));
    }
}

#[test]
fn test_preview_then_cancel_restores_original() {
    let m = manager();
    m.set_theme("dark").unwrap();
    let w = swatch();
    m.register(&w);
    let (mut picker, calls) = wired_picker(&m);

    picker.show();
    picker.handle(PickerAction::Down).unwrap();
    assert_eq!(m.current().as_deref(), Some("light"));

    let outcome = picker.handle(PickerAction::Cancel).unwrap();
    assert_eq!(outcome, Some(PickerOutcome::Cancelled));
    assert_eq!(m.current().as_deref(), Some("dark"));
    assert_eq!(roles_of(&w), expected_roles(&m.catalog().lookup("dark").unwrap()));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.cancelled, 1);
    assert!(calls.selected.is_empty());
    assert!(calls.saved.is_empty());
}

#[test]
fn test_preview_then_save_persists_preview() {
    let m = manager();
    m.set_theme("dark").unwrap();
    let (mut picker, calls) = wired_picker(&m);

    picker.show();
    picker.handle(PickerAction::Down).unwrap();
    let outcome = picker.handle(PickerAction::Save).unwrap();
    assert_eq!(outcome, Some(PickerOutcome::Saved("light".to_string())));
    assert_eq!(m.current().as_deref(), Some("light"));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.saved, vec!["light"]);
    assert!(calls.selected.is_empty());
    assert_eq!(calls.cancelled, 0);
}

#[test]
fn test_commit_without_save() {
    let m = manager();
    m.set_theme("dark").unwrap();
    let (mut picker, calls) = wired_picker(&m);

    picker.show();
    picker.handle(PickerAction::Down).unwrap();
    picker.handle(PickerAction::Down).unwrap();
    assert_eq!(picker.selected_name(), Some("solarized"));
    let outcome = picker.handle(PickerAction::Commit).unwrap();
    assert_eq!(outcome, Some(PickerOutcome::Committed("solarized".to_string())));
    assert_eq!(m.current().as_deref(), Some("solarized"));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.selected, vec!["solarized"]);
    assert!(calls.saved.is_empty());
    assert_eq!(calls.cancelled, 0);
}

#[test]
fn test_actions_after_close_are_ignored() {
    let m = manager();
    m.set_theme("dark").unwrap();
    let (mut picker, calls) = wired_picker(&m);

    picker.show();
    picker.handle(PickerAction::Commit).unwrap();
    assert_eq!(picker.handle(PickerAction::Down).unwrap(), None);
    assert_eq!(picker.handle(PickerAction::Cancel).unwrap(), None);
    assert_eq!(m.current().as_deref(), Some("dark"));
    assert_eq!(calls.lock().unwrap().selected, vec!["dark"]);
}

#[test]
fn test_callback_may_reenter_manager() {
    let m = manager();
    m.set_theme("dark").unwrap();
    let mut picker = ThemePicker::new(Arc::clone(&m));
    let inner = Arc::clone(&m);
    picker.on_cancel(move || {
        inner.set_theme("gruvbox").unwrap();
    });
    picker.show();
    picker.handle(PickerAction::Cancel).unwrap();
    assert_eq!(m.current().as_deref(), Some("gruvbox"));
}
