//! Lazy content mounting.
//!
//! A group does not build its nested content until it is first activated.
//! After that the content is kept alive for the rest of the group's life,
//! even while collapsed; only its visibility follows the active flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Something whose nested content is built on first activation.
pub trait LazyMountable {
    /// Whether the content has ever been materialized.
    fn is_booted(&self) -> bool;

    /// Mark the content as materialized. Returns true on the first call only.
    fn boot(&self) -> bool;

    /// Hand out `content`, building it on demand, once the gate is booted.
    fn show_lazy<'a, T>(&self, content: &'a mut LazyContent<T>) -> Option<&'a mut T>
    where
        Self: Sized,
    {
        if self.is_booted() {
            content.materialize()
        } else {
            None
        }
    }
}

/// One-way "has ever been active" flag.
#[derive(Debug, Clone, Default)]
pub struct LazyGate {
    booted: Arc<AtomicBool>,
}

impl LazyGate {
    /// Create a closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate that is already booted (eager content).
    pub fn booted() -> Self {
        Self {
            booted: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl LazyMountable for LazyGate {
    fn is_booted(&self) -> bool {
        self.booted.load(Ordering::SeqCst)
    }

    fn boot(&self) -> bool {
        !self.booted.swap(true, Ordering::SeqCst)
    }
}

/// Deferred content, built at most once.
pub struct LazyContent<T> {
    builder: Option<Box<dyn FnOnce() -> T>>,
    value: Option<T>,
}

impl<T> LazyContent<T> {
    /// Defer construction of the content to `builder`.
    pub fn new<F>(builder: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            builder: Some(Box::new(builder)),
            value: None,
        }
    }

    /// Wrap content that already exists.
    pub fn ready(value: T) -> Self {
        Self {
            builder: None,
            value: Some(value),
        }
    }

    /// Whether the builder has run.
    pub fn is_materialized(&self) -> bool {
        self.value.is_some()
    }

    /// The content, if it has been built.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Build the content if needed and return it.
    pub fn materialize(&mut self) -> Option<&mut T> {
        if self.value.is_none()
            && let Some(build) = self.builder.take()
        {
            self.value = Some(build());
        }
        self.value.as_mut()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LazyContent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyContent")
            .field("pending", &self.builder.is_some())
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_gate_boots_once() {
        let gate = LazyGate::new();
        assert!(!gate.is_booted());
        assert!(gate.boot());
        assert!(!gate.boot());
        assert!(gate.is_booted());
    }

    #[test]
    fn test_content_not_built_before_boot() {
        let builds = Rc::new(Cell::new(0));
        let counter = Rc::clone(&builds);
        let mut content = LazyContent::new(move || {
            counter.set(counter.get() + 1);
            vec!["a", "b"]
        });
        let gate = LazyGate::new();

        assert!(gate.show_lazy(&mut content).is_none());
        assert_eq!(builds.get(), 0);

        gate.boot();
        assert_eq!(gate.show_lazy(&mut content).map(|v| v.len()), Some(2));
        assert_eq!(gate.show_lazy(&mut content).map(|v| v.len()), Some(2));
        assert_eq!(builds.get(), 1);
        assert!(content.is_materialized());
    }

    #[test]
    fn test_ready_content() {
        let mut content = LazyContent::ready(3);
        assert!(content.is_materialized());
        assert_eq!(content.materialize().copied(), Some(3));
        assert!(LazyGate::booted().is_booted());
    }
}
