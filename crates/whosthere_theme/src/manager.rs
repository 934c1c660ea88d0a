//! Theme manager: current theme plus the registry of theme-aware widgets.
//!
//! One mutex guards `current` and the registry. Critical sections only record
//! state and clone the registry; styling always happens after the lock is
//! released, so a widget (or callback) that calls back into the manager while
//! being styled cannot deadlock.
//!
//! Every successful [ThemeManager::set_theme] bumps a generation counter under
//! the lock. Each registration remembers the generation it was last styled
//! from and refuses an older one, so when two broadcasts interleave the newer
//! theme wins on every widget and matches [ThemeManager::current].

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::capability::{Capabilities, Themeable};
use crate::catalog::ThemeCatalog;
use crate::error::Result;
use crate::theme::Theme;

/// Identifies one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(Uuid);

impl WidgetId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What happened when a theme was offered to one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Styled {
    Applied,
    /// Already styled from a newer generation.
    Stale,
    /// The owner dropped the widget.
    Gone,
}

/// Type-erased, non-owning style target.
trait StyleTarget: Send + Sync {
    fn apply(&self, theme: &Theme, generation: u64) -> Styled;
}

struct WeakTarget<W> {
    widget: Weak<Mutex<W>>,
    capabilities: Capabilities<W>,
    /// Generation this widget was last styled from. Held while styling.
    stamp: Mutex<u64>,
}

impl<W: Send> StyleTarget for WeakTarget<W> {
    fn apply(&self, theme: &Theme, generation: u64) -> Styled {
        let Some(widget) = self.widget.upgrade() else {
            return Styled::Gone;
        };
        let mut stamp = lock(&self.stamp);
        if *stamp > generation {
            return Styled::Stale;
        }
        self.capabilities.apply(&mut lock(&widget), theme);
        *stamp = generation;
        Styled::Applied
    }
}

#[derive(Clone)]
struct Registration {
    id: WidgetId,
    target: Arc<dyn StyleTarget>,
}

#[derive(Default)]
struct ManagerState {
    current: Option<Arc<Theme>>,
    generation: u64,
    widgets: Vec<Registration>,
}

/// Concurrency-safe holder of the current theme and registered widgets.
///
/// Construct one per application and pass it (usually as `Arc<ThemeManager>`)
/// to whatever builds widgets. See [crate::global] for an optional process-wide
/// accessor over an explicit instance.
pub struct ThemeManager {
    catalog: Arc<ThemeCatalog>,
    state: Mutex<ManagerState>,
}

impl ThemeManager {
    /// Create a manager over `catalog`. No theme is current until
    /// [ThemeManager::set_theme] succeeds.
    pub fn new(catalog: impl Into<Arc<ThemeCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            state: Mutex::new(ManagerState::default()),
        }
    }

    pub fn catalog(&self) -> &Arc<ThemeCatalog> {
        &self.catalog
    }

    /// Register a widget with the capabilities its kind declares.
    pub fn register<W>(&self, widget: &Arc<Mutex<W>>) -> WidgetId
    where
        W: Themeable + Send + 'static,
    {
        self.register_with(widget, W::capabilities())
    }

    /// Register a widget with an explicit capability set.
    ///
    /// The manager keeps only a weak reference: dropping the widget is never
    /// blocked and its registration is pruned on a later broadcast. If a theme
    /// is current, the widget is styled before this returns. Registering the
    /// same widget twice is allowed and styles it twice per broadcast.
    pub fn register_with<W>(&self, widget: &Arc<Mutex<W>>, capabilities: Capabilities<W>) -> WidgetId
    where
        W: Send + 'static,
    {
        let id = WidgetId::new();
        let target: Arc<dyn StyleTarget> = Arc::new(WeakTarget {
            widget: Arc::downgrade(widget),
            capabilities,
            stamp: Mutex::new(0),
        });

        let (current, generation, registered) = {
            let mut state = self.lock_state();
            state.widgets.push(Registration {
                id,
                target: Arc::clone(&target),
            });
            (state.current.clone(), state.generation, state.widgets.len())
        };

        debug!(
            widget = %id,
            capabilities = capabilities.count(),
            registered,
            "widget registered"
        );

        if let Some(theme) = current {
            target.apply(&theme, generation);
        }
        id
    }

    /// Remove a registration. Returns false if `id` was not registered.
    pub fn unregister(&self, id: WidgetId) -> bool {
        let mut state = self.lock_state();
        let before = state.widgets.len();
        state.widgets.retain(|r| r.id != id);
        state.widgets.len() != before
    }

    /// Make `name` the current theme and style every registered widget with it.
    ///
    /// Fails with [crate::ThemeError::UnknownTheme] before touching any state
    /// if the catalog has no such theme.
    ///
    /// Setters run with that widget's own mutex (and its generation stamp)
    /// held. A setter may register other widgets, but it must not call
    /// `set_theme` on this manager: restyling itself from inside its own
    /// setter deadlocks.
    pub fn set_theme(&self, name: &str) -> Result<Arc<Theme>> {
        let theme = self.catalog.lookup(name).inspect_err(|_| {
            warn!(theme = name, "unknown theme requested");
        })?;

        let (generation, snapshot) = {
            let mut state = self.lock_state();
            state.generation += 1;
            state.current = Some(Arc::clone(&theme));
            (state.generation, state.widgets.clone())
        };

        let mut styled = 0usize;
        let mut gone = Vec::new();
        for registration in &snapshot {
            match registration.target.apply(&theme, generation) {
                Styled::Applied => styled += 1,
                Styled::Stale => {}
                Styled::Gone => gone.push(registration.id),
            }
        }
        if !gone.is_empty() {
            self.prune(&gone);
        }

        info!(
            theme = %theme.name(),
            generation,
            styled,
            pruned = gone.len(),
            "theme applied"
        );
        Ok(theme)
    }

    /// Name of the current theme, if one was ever set.
    pub fn current(&self) -> Option<String> {
        self.lock_state()
            .current
            .as_ref()
            .map(|t| t.name().to_string())
    }

    /// The current theme, if one was ever set.
    pub fn current_theme(&self) -> Option<Arc<Theme>> {
        self.lock_state().current.clone()
    }

    /// Number of registrations, including ones whose widget was dropped but
    /// not yet pruned.
    pub fn len(&self) -> usize {
        self.lock_state().widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&self, gone: &[WidgetId]) {
        let mut state = self.lock_state();
        state.widgets.retain(|r| !gone.contains(&r.id));
        debug!(pruned = gone.len(), remaining = state.widgets.len(), "dropped widgets pruned");
    }

    fn lock_state(&self) -> MutexGuard<'_, ManagerState> {
        lock(&self.state)
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("ThemeManager")
            .field("themes", &self.catalog.len())
            .field("current", &state.current.as_ref().map(|t| t.name()))
            .field("generation", &state.generation)
            .field("registered", &state.widgets.len())
            .finish()
    }
}

/// Critical sections never leave state half-written, so a poisoned lock is
/// still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
