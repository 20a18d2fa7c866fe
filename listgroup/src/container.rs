//! The enclosing list: group registry and exclusivity broadcasts.
//!
//! A [`ListContainer`] tracks the groups mounted inside it. When a top-level
//! group becomes the active selection it calls
//! [`ContainerHandle::notify_selected`], and the container forwards
//! `select(id)` to every registered group. Each group then recomputes its own
//! state from the broadcast id; the container keeps no "current selection".
//!
//! Neither side owns the other. The registry holds weak references to the
//! groups, and groups hold a [`ContainerHandle`] (a weak reference) to the
//! container.
//!
//! Selections are serialized per container: [`ContainerHandle::select_exclusive`]
//! holds a selection lock across the broadcast and the selecting group's own
//! flip, so two threads selecting different groups can never both win. The
//! lock is reentrant, so a change hook may select another group of the same
//! container on the selecting thread.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use log::{debug, trace};
use parking_lot::ReentrantMutex;

use crate::identity::GroupId;

/// A node that can be registered with a container and receive broadcasts.
pub trait Registrable: Send + Sync {
    /// The identity used as the registry and broadcast key.
    fn group_id(&self) -> GroupId;

    /// Broadcast receipt: `selected` just became the exclusive selection.
    fn select(&self, selected: GroupId);

    /// Nodes exempt from exclusivity are skipped by broadcasts.
    fn is_sub_group(&self) -> bool {
        false
    }
}

/// How many groups a container lets stay expanded at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandMode {
    /// At most one top-level group is expanded (accordion style).
    #[default]
    Single,
    /// Groups expand independently; selection broadcasts are suppressed.
    Multiple,
}

struct ContainerInner {
    mode: ExpandMode,
    registry: RwLock<HashMap<GroupId, Weak<dyn Registrable>>>,
    selection: ReentrantMutex<()>,
}

impl ContainerInner {
    fn register(&self, id: GroupId, node: Weak<dyn Registrable>) {
        let mut registry = match self.registry.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if registry.insert(id, node).is_some() {
            trace!("Re-registered {}", id);
        } else {
            debug!("Registered {} ({} total)", id, registry.len());
        }
    }

    fn unregister(&self, id: GroupId) -> bool {
        let mut registry = match self.registry.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let removed = registry.remove(&id).is_some();
        if removed {
            debug!("Unregistered {} ({} left)", id, registry.len());
        }
        removed
    }

    fn notify_selected(&self, selected: GroupId) -> usize {
        if self.mode == ExpandMode::Multiple {
            trace!("Selection of {} not broadcast (multiple mode)", selected);
            return 0;
        }

        // Snapshot the registry so receivers may register or unregister
        // while the broadcast is running.
        let targets: Vec<Weak<dyn Registrable>> = match self.registry.read() {
            Ok(guard) => guard.values().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().values().cloned().collect(),
        };

        let mut delivered = 0;
        for node in targets.iter().filter_map(Weak::upgrade) {
            if node.is_sub_group() {
                continue;
            }
            node.select(selected);
            delivered += 1;
        }
        debug!("Broadcast select({}) to {} groups", selected, delivered);
        delivered
    }

    fn select_exclusive<R>(&self, selected: GroupId, apply: impl FnOnce() -> R) -> R {
        let _selection = self.selection.lock();
        self.notify_selected(selected);
        apply()
    }

    fn read_registry<R>(
        &self,
        f: impl FnOnce(&HashMap<GroupId, Weak<dyn Registrable>>) -> R,
    ) -> R {
        match self.registry.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }
}

impl std::fmt::Debug for ContainerInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<GroupId> = self.read_registry(|r| r.keys().copied().collect());
        f.debug_struct("ContainerInner")
            .field("mode", &self.mode)
            .field("registry", &ids)
            .finish()
    }
}

/// A list that hosts group nodes and brokers exclusivity between them.
///
/// Cheap to clone; all clones share one registry.
///
/// # Example
///
/// ```
/// use listgroup::prelude::*;
///
/// let list = ListContainer::new();
/// let users = ListGroup::builder().parent(&list).mount();
/// let orders = ListGroup::builder().parent(&list).mount();
///
/// users.click();
/// orders.click();
/// assert!(!users.is_active());
/// assert!(orders.is_active());
/// ```
#[derive(Debug, Clone)]
pub struct ListContainer {
    inner: Arc<ContainerInner>,
}

impl ListContainer {
    /// Create an empty container in [`ExpandMode::Single`].
    pub fn new() -> Self {
        Self::with_mode(ExpandMode::Single)
    }

    /// Create an empty container with the given expand mode.
    pub fn with_mode(mode: ExpandMode) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                mode,
                registry: RwLock::new(HashMap::new()),
                selection: ReentrantMutex::new(()),
            }),
        }
    }

    /// The container's expand mode.
    pub fn mode(&self) -> ExpandMode {
        self.inner.mode
    }

    /// Get a non-owning handle for groups to keep.
    pub fn handle(&self) -> ContainerHandle {
        ContainerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Add `node` to the registry. Registering the same id again replaces
    /// the previous entry.
    pub fn register<N: Registrable + 'static>(&self, node: &Arc<N>) {
        let weak: Weak<N> = Arc::downgrade(node);
        self.inner.register(node.group_id(), weak);
    }

    /// Remove a node. Returns false (and does nothing) if it was absent.
    pub fn unregister(&self, id: GroupId) -> bool {
        self.inner.unregister(id)
    }

    /// Deliver `select(selected)` to every registered node that is not a
    /// sub-group.
    ///
    /// Returns the number of nodes the broadcast reached. All deliveries
    /// complete before this returns.
    pub fn notify_selected(&self, selected: GroupId) -> usize {
        self.inner.notify_selected(selected)
    }

    /// Whether a node with this id is registered.
    pub fn contains(&self, id: GroupId) -> bool {
        self.inner.read_registry(|r| r.contains_key(&id))
    }

    /// Ids of all registered nodes, in no particular order.
    pub fn ids(&self) -> Vec<GroupId> {
        self.inner.read_registry(|r| r.keys().copied().collect())
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.inner.read_registry(|r| r.len())
    }

    /// Check if no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ListContainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak reference to a [`ListContainer`].
///
/// A detached handle (default, or one whose container was dropped) turns
/// every operation into a no-op, so a group works standalone.
#[derive(Debug, Clone, Default)]
pub struct ContainerHandle {
    inner: Weak<ContainerInner>,
}

impl ContainerHandle {
    /// A handle that is not attached to any container.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether the container is still alive.
    pub fn is_attached(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Get the container back, if it is still alive.
    pub fn upgrade(&self) -> Option<ListContainer> {
        self.inner.upgrade().map(|inner| ListContainer { inner })
    }

    /// See [`ListContainer::register`].
    pub fn register<N: Registrable + 'static>(&self, node: &Arc<N>) {
        if let Some(inner) = self.inner.upgrade() {
            let weak: Weak<N> = Arc::downgrade(node);
            inner.register(node.group_id(), weak);
        }
    }

    /// See [`ListContainer::unregister`].
    pub fn unregister(&self, id: GroupId) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.unregister(id))
    }

    /// See [`ListContainer::notify_selected`]. Returns 0 when detached.
    pub fn notify_selected(&self, selected: GroupId) -> usize {
        self.inner
            .upgrade()
            .map_or(0, |inner| inner.notify_selected(selected))
    }

    /// Broadcast `selected` and run `apply` while holding the container's
    /// selection lock. When detached, `apply` simply runs.
    pub fn select_exclusive<R>(&self, selected: GroupId, apply: impl FnOnce() -> R) -> R {
        match self.inner.upgrade() {
            Some(inner) => inner.select_exclusive(selected, apply),
            None => apply(),
        }
    }
}
