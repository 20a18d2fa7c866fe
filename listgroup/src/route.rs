//! Navigation path source and route patterns.
//!
//! [`RouteMatcher`] holds the current navigation path and notifies
//! subscribers synchronously whenever it reports a new one. Groups compile
//! their `group` option into a [`RoutePattern`] and re-evaluate it on each
//! notification.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use log::{trace, warn};
use regex::Regex;

use crate::error::RoutePatternError;
use crate::state::WatchId;

/// Callback invoked with the freshly reported path.
pub type RouteListener = Arc<dyn Fn(&str) + Send + Sync>;

/// A regular expression matched anywhere inside a navigation path.
///
/// A pattern that fails to compile never matches. The compile error is
/// logged once, the first time the pattern is evaluated.
#[derive(Debug)]
pub struct RoutePattern {
    source: String,
    compiled: Result<Regex, RoutePatternError>,
    warned: AtomicBool,
}

impl RoutePattern {
    /// Compile `pattern`, keeping any error for later inspection.
    pub fn new(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let compiled = Regex::new(&source).map_err(|err| RoutePatternError {
            pattern: source.clone(),
            source: err,
        });
        Self {
            source,
            compiled,
            warned: AtomicBool::new(false),
        }
    }

    /// Compile `pattern`, failing on malformed input.
    pub fn try_new(pattern: impl Into<String>) -> Result<Self, RoutePatternError> {
        let pattern = Self::new(pattern);
        if let Some(err) = pattern.error() {
            return Err(err.clone());
        }
        Ok(pattern)
    }

    /// The pattern text as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// The compile error, if any.
    pub fn error(&self) -> Option<&RoutePatternError> {
        self.compiled.as_ref().err()
    }

    /// Whether `path` contains a match anywhere (not a full match).
    pub fn matches(&self, path: &str) -> bool {
        match &self.compiled {
            Ok(regex) => regex.is_match(path),
            Err(err) => {
                if !self.warned.swap(true, Ordering::SeqCst) {
                    warn!("{}; treating as never matching", err);
                }
                false
            }
        }
    }
}

struct RouterInner {
    path: RwLock<String>,
    listeners: RwLock<Vec<(WatchId, RouteListener)>>,
}

impl RouterInner {
    fn unsubscribe(&self, id: WatchId) -> bool {
        let mut listeners = match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

/// Source of the current navigation path.
///
/// Cheap to clone; all clones share one path and one listener list.
#[derive(Clone)]
pub struct RouteMatcher {
    inner: Arc<RouterInner>,
}

impl RouteMatcher {
    /// Create a matcher positioned at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                path: RwLock::new(path.into()),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The current path.
    pub fn current_path(&self) -> String {
        self.inner
            .path
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Report a new path and notify every listener before returning.
    ///
    /// Navigating to the path that is already current is not a route change
    /// and notifies nobody. Returns true if listeners were notified.
    pub fn navigate(&self, path: impl Into<String>) -> bool {
        let path = path.into();
        {
            let mut current = match self.inner.path.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *current == path {
                trace!("Route unchanged: {}", path);
                return false;
            }
            current.clone_from(&path);
        }

        let listeners: Vec<RouteListener> = match self.inner.listeners.read() {
            Ok(guard) => guard.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect(),
        };
        trace!("Route changed to {} ({} listeners)", path, listeners.len());
        for listener in listeners {
            listener(path.as_str());
        }
        true
    }

    /// Register a route-change handler.
    pub fn subscribe<F>(&self, f: F) -> RouteSubscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = WatchId::next();
        match self.inner.listeners.write() {
            Ok(mut guard) => guard.push((id, Arc::new(f))),
            Err(poisoned) => poisoned.into_inner().push((id, Arc::new(f))),
        }
        RouteSubscription {
            router: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered route-change handlers.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new("/")
    }
}

impl std::fmt::Debug for RouteMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteMatcher")
            .field("path", &self.current_path())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A registered route-change handler.
///
/// Holds the router weakly; dropping the subscription does not unsubscribe,
/// call [`RouteSubscription::cancel`].
#[derive(Debug, Clone)]
pub struct RouteSubscription {
    router: Weak<RouterInner>,
    id: WatchId,
}

impl RouteSubscription {
    /// The listener id inside the router.
    pub fn id(&self) -> WatchId {
        self.id
    }

    /// Remove the handler. Returns false if it was already gone.
    pub fn cancel(&self) -> bool {
        self.router
            .upgrade()
            .is_some_and(|router| router.unsubscribe(self.id))
    }
}
