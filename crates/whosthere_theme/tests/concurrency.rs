//! Concurrent registration and theme changes.
//!
//! Run with: cargo test -p whosthere-theme --test concurrency

mod common;

use std::sync::{Arc, Mutex};
use std::thread;

use common::{expected_roles, manager, roles_of, swatch, Swatch};

const REGISTER_THREADS: usize = 8;
const WIDGETS_PER_THREAD: usize = 16;
const SETTER_THREADS: usize = 6;
const SETS_PER_THREAD: usize = 40;

#[test]
fn test_concurrent_register_and_set_theme() {
    let m = manager();
    let names = m.catalog().names();
    let widgets: Mutex<Vec<Arc<Mutex<Swatch>>>> = Mutex::new(Vec::new());
    let requested: Mutex<Vec<String>> = Mutex::new(Vec::new());

    thread::scope(|scope| {
        for _ in 0..REGISTER_THREADS {
            scope.spawn(|| {
                for _ in 0..WIDGETS_PER_THREAD {
                    let w = swatch();
                    m.register(&w);
                    widgets.lock().unwrap().push(w);
                    thread::yield_now();
                }
            });
        }
        for t in 0..SETTER_THREADS {
            let names = &names;
            let m = &m;
            let requested = &requested;
            scope.spawn(move || {
                for i in 0..SETS_PER_THREAD {
                    let name = &names[(t * 7 + i * 3) % names.len()];
                    m.set_theme(name).unwrap();
                    requested.lock().unwrap().push(name.clone());
                }
            });
        }
    });

    let requested = requested.into_inner().unwrap();
    let widgets = widgets.into_inner().unwrap();
    assert_eq!(widgets.len(), REGISTER_THREADS * WIDGETS_PER_THREAD);
    assert_eq!(m.len(), widgets.len());

    let current = m.current().expect("a theme was set");
    assert!(requested.contains(&current));

    let candidates: Vec<_> = requested
        .iter()
        .map(|n| expected_roles(&m.catalog().lookup(n).unwrap()))
        .collect();
    let current_roles = expected_roles(&m.catalog().lookup(&current).unwrap());
    for w in &widgets {
        let roles = roles_of(w);
        // Never a mixture of two themes.
        assert!(candidates.contains(&roles), "torn widget roles: {roles:?}");
        // Newest generation wins everywhere once quiet.
        assert_eq!(roles, current_roles);
    }
}

#[test]
fn test_concurrent_reads_are_never_torn() {
    let m = manager();
    let names = m.catalog().names();
    m.set_theme(&names[0]).unwrap();

    thread::scope(|scope| {
        for t in 0..4 {
            let m = &m;
            let names = &names;
            scope.spawn(move || {
                for i in 0..100 {
                    m.set_theme(&names[(t + i) % names.len()]).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let m = &m;
            let names = &names;
            scope.spawn(move || {
                for _ in 0..200 {
                    let current = m.current().unwrap();
                    assert!(names.contains(&current));
                }
            });
        }
    });
}
