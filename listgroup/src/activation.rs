//! Activation capability: the expanded/collapsed flag of a group.

use crate::state::{State, WatchId};

/// Something that can be switched between active and inactive.
pub trait Activatable {
    /// Whether the item is currently active (expanded).
    fn is_active(&self) -> bool;

    /// Set the active flag. Returns true if the value changed.
    fn set_active(&self, active: bool) -> bool;

    /// Flip the active flag. Returns true if the value changed.
    fn toggle(&self) -> bool {
        self.set_active(!self.is_active())
    }
}

/// Plain activation flag with change hooks.
///
/// This is the bare state machine (`Inactive` <-> `Active`); the group node
/// layers the click, route and broadcast rules on top of it.
#[derive(Debug, Clone, Default)]
pub struct ActivationState {
    active: State<bool>,
}

impl ActivationState {
    /// Create a new activation state.
    pub fn new(active: bool) -> Self {
        Self {
            active: State::new(active),
        }
    }

    /// Run `f` synchronously whenever the flag changes.
    pub fn watch<F>(&self, f: F) -> WatchId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.active.watch(move |v| f(*v))
    }

    /// Remove a hook added with [`ActivationState::watch`].
    pub fn unwatch(&self, id: WatchId) -> bool {
        self.active.unwatch(id)
    }

    /// Check if the flag changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.active.is_dirty()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.active.clear_dirty();
    }
}

impl Activatable for ActivationState {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) -> bool {
        self.active.set(active)
    }
}
