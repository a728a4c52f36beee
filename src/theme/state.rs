// Shared weather mode cell
//
// `ThemeProvider` owns the single mode value for the session. Display
// sections never see the provider; they are handed a `ThemeHandle` at
// construction, which can read the mode, write it, and register listeners.
// Everything runs on the UI thread, so the cell is an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use super::palette::{palette_for, ThemePalette};
use super::{ScopeError, Weather};

/// Identifier for a registered mode change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(Weather, &ThemePalette)>;

struct ThemeCell {
    weather: Weather,
    /// Bumped on every `set_mode`, used to drop stale notifications
    generation: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

/// Owner of the active weather mode
///
/// Created once at startup with the default mode. Dropping the provider ends
/// the scope: every handle obtained from it starts returning `ScopeError`.
pub struct ThemeProvider {
    cell: Rc<RefCell<ThemeCell>>,
}

impl ThemeProvider {
    /// Create a provider holding `Weather::default()`
    pub fn new() -> Self {
        Self::with_mode(Weather::default())
    }

    pub(crate) fn with_mode(weather: Weather) -> Self {
        Self {
            cell: Rc::new(RefCell::new(ThemeCell {
                weather,
                generation: 0,
                listeners: Vec::new(),
                next_listener_id: 1,
            })),
        }
    }

    /// Hand out a handle bound to this provider's lifetime
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            cell: Rc::downgrade(&self.cell),
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.cell.borrow();
        f.debug_struct("ThemeProvider")
            .field("weather", &cell.weather)
            .field("generation", &cell.generation)
            .field("listeners", &cell.listeners.len())
            .finish()
    }
}

/// Read/write access to the active weather mode
///
/// Cheap to clone. A default-constructed handle is detached and fails every
/// call with `ScopeError`, as does a handle that outlived its provider.
#[derive(Clone, Default)]
pub struct ThemeHandle {
    cell: Weak<RefCell<ThemeCell>>,
}

impl ThemeHandle {
    fn cell(&self) -> Result<Rc<RefCell<ThemeCell>>, ScopeError> {
        self.cell.upgrade().ok_or(ScopeError)
    }

    /// Whether the provider is still alive
    pub fn is_attached(&self) -> bool {
        self.cell.strong_count() > 0
    }

    /// Current mode
    pub fn mode(&self) -> Result<Weather, ScopeError> {
        Ok(self.cell()?.borrow().weather)
    }

    /// Palette derived from the current mode
    pub fn palette(&self) -> Result<&'static ThemePalette, ScopeError> {
        self.mode().map(palette_for)
    }

    /// Number of `set_mode` calls applied so far
    #[cfg(test)]
    pub fn generation(&self) -> Result<u64, ScopeError> {
        Ok(self.cell()?.borrow().generation)
    }

    /// Replace the active mode and notify every listener before returning
    ///
    /// The new value is applied unconditionally. Listeners may call back into
    /// the handle, including `set_mode`; in that case the outer notification
    /// stops once a newer value has been published, so no listener is left
    /// holding a stale mode. A listener removed by an earlier listener during
    /// the same pass is not called.
    pub fn set_mode(&self, weather: Weather) -> Result<(), ScopeError> {
        let cell = self.cell()?;

        let (from, generation, listeners) = {
            let mut state = cell.borrow_mut();
            let from = state.weather;
            state.weather = weather;
            state.generation += 1;
            let listeners: Vec<(ListenerId, Listener)> = state
                .listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            (from, state.generation, listeners)
        };

        info!(weather.from = %from, weather.to = %weather, generation, "Weather mode set");

        let palette = palette_for(weather);
        for (id, listener) in listeners {
            let registered = {
                let state = cell.borrow();
                if state.generation != generation {
                    debug!(generation, "Superseded by a newer mode, stopping notification");
                    break;
                }
                state.listeners.iter().any(|(listener_id, _)| *listener_id == id)
            };
            if registered {
                listener(weather, palette);
            }
        }
        Ok(())
    }

    /// Register a listener called synchronously on every `set_mode`
    pub fn subscribe<F>(&self, listener: F) -> Result<ListenerId, ScopeError>
    where
        F: Fn(Weather, &ThemePalette) + 'static,
    {
        let cell = self.cell()?;
        let mut state = cell.borrow_mut();
        let id = ListenerId(state.next_listener_id);
        state.next_listener_id += 1;
        let listener: Listener = Rc::new(listener);
        state.listeners.push((id, listener));
        debug!(listener_id = id.0, "Weather listener registered");
        Ok(id)
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: ListenerId) -> Result<bool, ScopeError> {
        let cell = self.cell()?;
        let mut state = cell.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = state.listeners.len() != before;
        if removed {
            debug!(listener_id = id.0, "Weather listener removed");
        }
        Ok(removed)
    }

    pub fn listener_count(&self) -> Result<usize, ScopeError> {
        Ok(self.cell()?.borrow().listeners.len())
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    fn any_weather() -> impl Strategy<Value = Weather> {
        prop_oneof![
            Just(Weather::Winter),
            Just(Weather::Summer),
            Just(Weather::Rain),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// mode() after set_mode(m) returns exactly m
        #[test]
        fn prop_set_then_get(weather in any_weather()) {
            let provider = ThemeProvider::new();
            let handle = provider.handle();
            handle.set_mode(weather).unwrap();
            prop_assert_eq!(handle.mode().unwrap(), weather);
        }

        /// Setting the same mode twice is observably the same as once
        #[test]
        fn prop_set_mode_idempotent(start in any_weather(), target in any_weather()) {
            let once = ThemeProvider::with_mode(start);
            once.handle().set_mode(target).unwrap();

            let twice = ThemeProvider::with_mode(start);
            twice.handle().set_mode(target).unwrap();
            twice.handle().set_mode(target).unwrap();

            prop_assert_eq!(once.handle().mode().unwrap(), twice.handle().mode().unwrap());
            prop_assert_eq!(once.handle().palette().unwrap(), twice.handle().palette().unwrap());
        }

        /// A -> B -> A restores the original palette
        #[test]
        fn prop_palette_round_trip(a in any_weather(), b in any_weather()) {
            let provider = ThemeProvider::with_mode(a);
            let handle = provider.handle();
            let original = *handle.palette().unwrap();

            handle.set_mode(b).unwrap();
            handle.set_mode(a).unwrap();

            prop_assert_eq!(*handle.palette().unwrap(), original);
        }

        /// The last write wins for any sequence of writes
        #[test]
        fn prop_last_write_wins(writes in proptest::collection::vec(any_weather(), 1..20)) {
            let provider = ThemeProvider::new();
            let handle = provider.handle();
            for weather in &writes {
                handle.set_mode(*weather).unwrap();
            }
            prop_assert_eq!(handle.mode().unwrap(), *writes.last().unwrap());
            prop_assert_eq!(handle.generation().unwrap(), writes.len() as u64);
        }
    }

    #[test]
    fn test_default_mode_is_winter() {
        let provider = ThemeProvider::new();
        assert_eq!(provider.handle().mode(), Ok(Weather::Winter));
    }

    #[test]
    fn test_detached_handle_raises_scope_error() {
        let handle = ThemeHandle::default();
        assert!(!handle.is_attached());
        assert_eq!(handle.mode(), Err(ScopeError));
        assert_eq!(handle.set_mode(Weather::Rain), Err(ScopeError));
        assert!(handle.subscribe(|_, _| {}).is_err());
    }

    #[test]
    fn test_handle_fails_after_provider_dropped() {
        let provider = ThemeProvider::new();
        let handle = provider.handle();
        assert!(handle.is_attached());
        drop(provider);
        assert!(!handle.is_attached());
        assert_eq!(handle.mode(), Err(ScopeError));
        assert_eq!(handle.palette(), Err(ScopeError));
    }

    #[test]
    fn test_listeners_notified_synchronously() {
        let provider = ThemeProvider::new();
        let handle = provider.handle();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for _ in 0..3 {
            let seen = Rc::clone(&seen);
            handle
                .subscribe(move |weather, palette| {
                    assert_eq!(palette.weather, weather);
                    seen.borrow_mut().push(weather);
                })
                .unwrap();
        }

        handle.set_mode(Weather::Summer).unwrap();
        assert_eq!(*seen.borrow(), vec![Weather::Summer; 3]);
    }

    #[test]
    fn test_all_handles_observe_same_value() {
        let provider = ThemeProvider::new();
        let writer = provider.handle();
        let readers: Vec<ThemeHandle> = (0..5).map(|_| provider.handle()).collect();

        writer.set_mode(Weather::Rain).unwrap();
        for reader in &readers {
            assert_eq!(reader.mode(), Ok(Weather::Rain));
        }
    }

    #[test]
    fn test_unsubscribe() {
        let provider = ThemeProvider::new();
        let handle = provider.handle();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let id = handle
            .subscribe(move |_, _| counter.set(counter.get() + 1))
            .unwrap();
        handle.set_mode(Weather::Summer).unwrap();
        assert_eq!(calls.get(), 1);

        assert_eq!(handle.unsubscribe(id), Ok(true));
        assert_eq!(handle.unsubscribe(id), Ok(false));
        handle.set_mode(Weather::Rain).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(handle.listener_count(), Ok(0));
    }

    #[test]
    fn test_reentrant_set_mode_leaves_no_stale_listener() {
        let provider = ThemeProvider::new();
        let handle = provider.handle();

        // First listener redirects Summer to Rain
        let inner = handle.clone();
        handle
            .subscribe(move |weather, _| {
                if weather == Weather::Summer {
                    inner.set_mode(Weather::Rain).unwrap();
                }
            })
            .unwrap();

        let last_seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_seen);
        handle
            .subscribe(move |weather, _| sink.set(Some(weather)))
            .unwrap();

        handle.set_mode(Weather::Summer).unwrap();
        assert_eq!(handle.mode(), Ok(Weather::Rain));
        assert_eq!(last_seen.get(), Some(Weather::Rain));
    }

    #[test]
    fn test_listener_removed_mid_pass_is_not_called() {
        let provider = ThemeProvider::new();
        let handle = provider.handle();
        let victim: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let remover = handle.clone();
        let target = Rc::clone(&victim);
        handle
            .subscribe(move |_, _| {
                if let Some(id) = target.take() {
                    remover.unsubscribe(id).unwrap();
                }
            })
            .unwrap();

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = handle
            .subscribe(move |_, _| counter.set(counter.get() + 1))
            .unwrap();
        victim.set(Some(id));

        handle.set_mode(Weather::Summer).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(handle.listener_count(), Ok(1));
    }
}
