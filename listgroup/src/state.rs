use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Callback invoked with the new value after a state change.
pub type Watcher<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`State::watch`] and used to remove the watcher again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

impl WatchId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Reactive state wrapper with interior mutability and explicit watchers.
///
/// `State<T>` uses `Arc<RwLock<T>>` internally, so it is cheap to clone and
/// every clone observes the same value. Collaborators that need to react to
/// changes register a watcher with [`State::watch`]; watchers run
/// synchronously inside `set`/`update`, after the value lock is released, so
/// a watcher may read (or even write) the state without deadlocking.
///
/// # Example
///
/// ```
/// use listgroup::state::State;
///
/// let open = State::new(false);
/// open.watch(|v| println!("open is now {v}"));
/// assert!(open.set(true));
/// assert!(!open.set(true));
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    watchers: Arc<RwLock<Vec<(WatchId, Watcher<T>)>>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            watchers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value.
    ///
    /// Returns true if the value changed. Watchers only run on a change.
    pub fn set(&self, value: T) -> bool
    where
        T: Clone + PartialEq,
    {
        let snapshot = {
            let mut guard = match self.inner.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *guard == value {
                return false;
            }
            *guard = value;
            guard.clone()
        };
        self.dirty.store(true, Ordering::SeqCst);
        self.notify(&snapshot);
        true
    }

    /// Update the value using a closure. Watchers always run.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
        T: Clone,
    {
        let snapshot = {
            let mut guard = match self.inner.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            f(&mut guard);
            guard.clone()
        };
        self.dirty.store(true, Ordering::SeqCst);
        self.notify(&snapshot);
    }

    /// Register a watcher that runs after every change.
    pub fn watch<F>(&self, f: F) -> WatchId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = WatchId::next();
        match self.watchers.write() {
            Ok(mut guard) => guard.push((id, Arc::new(f))),
            Err(poisoned) => poisoned.into_inner().push((id, Arc::new(f))),
        }
        id
    }

    /// Remove a watcher. Returns false if it was not registered.
    pub fn unwatch(&self, id: WatchId) -> bool {
        let mut guard = match self.watchers.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = guard.len();
        guard.retain(|(watch_id, _)| *watch_id != id);
        guard.len() != before
    }

    /// Number of registered watchers
    pub fn watcher_count(&self) -> usize {
        self.watchers.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn notify(&self, value: &T) {
        // Snapshot so watchers can (un)register watchers while running.
        let watchers: Vec<Watcher<T>> = match self.watchers.read() {
            Ok(guard) => guard.iter().map(|(_, w)| Arc::clone(w)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, w)| Arc::clone(w))
                .collect(),
        };
        for watcher in watchers {
            watcher(value);
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            watchers: Arc::clone(&self.watchers),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("value", &self.inner)
            .field("dirty", &self.is_dirty())
            .field("watchers", &self.watcher_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn test_set_reports_change_and_marks_dirty() {
        let state = State::new(1);
        assert!(!state.is_dirty());
        assert!(state.set(2));
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!state.set(2));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_watchers_run_only_on_change() {
        let state = State::new(false);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        state.watch(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        state.set(true);
        state.set(true);
        state.set(false);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_watcher_sees_new_value_and_can_read_state() {
        let state = State::new(0);
        let reader = state.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        state.watch(move |v| {
            assert_eq!(*v, reader.get());
            sink.store(*v, Ordering::SeqCst);
        });

        state.update(|v| *v += 7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_unwatch() {
        let state = State::new(0);
        let id = state.watch(|_| {});
        assert_eq!(state.watcher_count(), 1);
        assert!(state.unwatch(id));
        assert!(!state.unwatch(id));
        assert_eq!(state.watcher_count(), 0);
    }

    #[test]
    fn test_writes_recover_from_poisoned_lock() {
        let state = State::new(1);
        let writer = state.clone();
        let result = std::thread::spawn(move || writer.update(|_| panic!("writer panicked"))).join();
        assert!(result.is_err());

        assert!(state.set(2));
        assert_eq!(state.get(), 2);
        state.update(|v| *v += 1);
        assert_eq!(state.get(), 3);
    }
}
