//! Run-on-UI-thread queue.
//!
//! Widgets are only touched by the UI loop. Anything running elsewhere (timer
//! tasks, picker callbacks, background work) hands the loop a closure through
//! a [UiHandle]; the loop drains the [UiQueue] once per tick, in submission
//! order, and redraws.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::state::AppState;

/// Deferred update run by the UI loop with exclusive access to the state.
pub type UiTask = Box<dyn FnOnce(&mut AppState) + Send>;

/// Cloneable sender side of the UI queue.
#[derive(Clone)]
pub struct UiHandle {
    tx: UnboundedSender<UiTask>,
}

/// Receiver side, owned by the UI loop.
pub struct UiQueue {
    rx: UnboundedReceiver<UiTask>,
}

/// Create a connected handle and queue.
pub fn ui_channel() -> (UiHandle, UiQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiHandle { tx }, UiQueue { rx })
}

impl UiHandle {
    /// Queue `task` for the UI loop. Returns false once the loop has exited.
    pub fn queue_update(&self, task: impl FnOnce(&mut AppState) + Send + 'static) -> bool {
        let sent = self.tx.send(Box::new(task)).is_ok();
        if !sent {
            debug!("ui queue closed; update dropped");
        }
        sent
    }

    /// True once the [UiQueue] has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl UiQueue {
    /// Run every queued task. Returns how many ran.
    pub fn drain(&mut self, state: &mut AppState) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task(state);
            ran += 1;
        }
        if ran > 0 {
            state.needs_redraw = true;
        }
        ran
    }
}
