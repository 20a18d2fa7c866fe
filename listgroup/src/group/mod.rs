//! ListGroup widget - a collapsible, nestable section of a navigation list.
//!
//! A group registers with its enclosing [`ListContainer`] when mounted and
//! unregisters when dropped. While registered:
//!
//! - a click (or the Enter key) toggles it, unless it is disabled;
//! - a route change re-evaluates its `group` pattern against the new path;
//! - when a top-level group becomes active it asks the container to
//!   broadcast its id, and every other top-level group collapses.
//!
//! Sub-groups take part in clicks and routes but ignore broadcasts, so they
//! stay open when a sibling section is selected.
//!
//! # Example
//!
//! ```
//! use listgroup::prelude::*;
//!
//! let router = RouteMatcher::new("/");
//! let list = ListContainer::new();
//! let users = ListGroup::builder()
//!     .group("/users")
//!     .parent(&list)
//!     .router(&router)
//!     .mount();
//! let orders = ListGroup::builder()
//!     .group("/orders")
//!     .parent(&list)
//!     .router(&router)
//!     .mount();
//!
//! router.navigate("/users/42");
//! assert!(users.is_active());
//! assert!(!orders.is_active());
//!
//! orders.click();
//! assert!(!users.is_active());
//! assert!(orders.is_active());
//! ```
//!
//! [`ListContainer`]: crate::container::ListContainer

mod builder;
mod config;
mod events;
mod view;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::activation::{Activatable, ActivationState};
use crate::container::{ContainerHandle, Registrable};
use crate::identity::GroupId;
use crate::lazy::{LazyContent, LazyGate, LazyMountable};
use crate::route::{RoutePattern, RouteSubscription};
use crate::state::WatchId;

pub use builder::GroupBuilder;
pub use config::{
    DEFAULT_ACTIVE_CLASS, EXPAND_ICON, GroupConfig, Ripple, RippleOptions, SUBGROUP_ICON,
};
pub use events::EventResult;
pub use view::{GroupClasses, HeaderView, IconSlot, ItemsView};

/// The part of a group that the container and the router reach through
/// weak references.
#[derive(Debug)]
struct GroupCore {
    id: GroupId,
    sub_group: bool,
    disabled: AtomicBool,
    pattern: Option<RoutePattern>,
    activation: ActivationState,
    gate: LazyGate,
    parent: ContainerHandle,
}

impl GroupCore {
    /// Write the active flag, booting the content gate first so observers
    /// of the flag already see materialized content.
    fn apply(&self, active: bool) -> bool {
        if active && self.gate.boot() {
            debug!("{} content materialized", self.id);
        }
        self.activation.set_active(active)
    }

    /// Become the selection: broadcast first, then flip locally. Both steps
    /// run under the container's selection lock.
    fn activate_exclusive(&self) -> bool {
        let was_active = self.activation.is_active();
        if self.sub_group {
            self.apply(true);
        } else {
            self.parent.select_exclusive(self.id, || self.apply(true));
        }
        !was_active
    }

    fn click(&self) -> bool {
        if self.disabled.load(Ordering::SeqCst) {
            debug!("{} is disabled, click ignored", self.id);
            return false;
        }
        if self.activation.is_active() {
            self.apply(false)
        } else {
            self.activate_exclusive()
        }
    }

    fn set_active(&self, active: bool) -> bool {
        if active && !self.activation.is_active() {
            self.activate_exclusive()
        } else {
            self.apply(active)
        }
    }

    fn route_changed(&self, path: &str) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        let matched = pattern.matches(path);
        debug!(
            "{} route {} against '{}': {}",
            self.id,
            path,
            pattern.as_str(),
            matched
        );
        if matched && !self.activation.is_active() {
            self.activate_exclusive()
        } else {
            self.apply(matched)
        }
    }
}

impl Registrable for GroupCore {
    fn group_id(&self) -> GroupId {
        self.id
    }

    fn select(&self, selected: GroupId) {
        if self.sub_group {
            return;
        }
        self.apply(self.id == selected);
    }

    fn is_sub_group(&self) -> bool {
        self.sub_group
    }
}

/// A mounted list group.
///
/// Dropping the group (or calling [`ListGroup::unmount`]) unregisters it
/// from its container before anything else is torn down.
#[derive(Debug)]
pub struct ListGroup {
    core: Arc<GroupCore>,
    config: GroupConfig,
    route: Option<RouteSubscription>,
}

impl ListGroup {
    /// Start building a group.
    pub fn builder() -> GroupBuilder {
        GroupBuilder::new()
    }

    /// The group's identity.
    pub fn id(&self) -> GroupId {
        self.core.id
    }

    /// The configuration the group was built with.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Whether this is a sub-group.
    pub fn is_sub_group(&self) -> bool {
        self.core.sub_group
    }

    /// Whether clicks are ignored.
    pub fn is_disabled(&self) -> bool {
        self.core.disabled.load(Ordering::SeqCst)
    }

    /// Enable or disable user toggling.
    pub fn set_disabled(&self, disabled: bool) {
        self.core.disabled.store(disabled, Ordering::SeqCst);
    }

    /// The compiled route pattern, if one was configured.
    pub fn pattern(&self) -> Option<&RoutePattern> {
        self.core.pattern.as_ref()
    }

    /// The container handle this group reports to.
    pub fn parent(&self) -> &ContainerHandle {
        &self.core.parent
    }

    /// Whether the group is currently registered with a live container.
    pub fn is_registered(&self) -> bool {
        self.core
            .parent
            .upgrade()
            .is_some_and(|list| list.contains(self.core.id))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Header click. Returns true if the active flag changed.
    pub fn click(&self) -> bool {
        self.core.click()
    }

    /// Re-evaluate the route pattern against `path`.
    ///
    /// Called automatically for groups mounted with a router.
    pub fn route_changed(&self, path: &str) -> bool {
        self.core.route_changed(path)
    }

    /// Broadcast receipt, as delivered by the container.
    pub fn select(&self, selected: GroupId) {
        self.core.select(selected);
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    /// Run `f` with the new flag after every change of the active flag.
    pub fn on_change<F>(&self, f: F) -> WatchId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.core.activation.watch(f)
    }

    /// Remove a hook added with [`ListGroup::on_change`].
    pub fn unwatch(&self, id: WatchId) -> bool {
        self.core.activation.unwatch(id)
    }

    /// Check if the active flag changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.core.activation.is_dirty()
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.core.activation.clear_dirty();
    }

    /// Whether the nested content has been materialized.
    pub fn is_materialized(&self) -> bool {
        self.core.gate.is_booted()
    }

    /// Header render model.
    pub fn header(&self) -> HeaderView {
        HeaderView::new(&self.config, self.is_active(), self.is_disabled())
    }

    /// Items render model, materializing `content` once the group has been
    /// active.
    pub fn items<'a, T>(&self, content: &'a mut LazyContent<T>) -> ItemsView<'a, T> {
        ItemsView {
            visible: self.is_active(),
            content: self.show_lazy(content),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Tear the group down. Equivalent to dropping it.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Activatable for ListGroup {
    fn is_active(&self) -> bool {
        self.core.activation.is_active()
    }

    /// Programmatic activation. Activating a top-level group broadcasts the
    /// same way a click does.
    fn set_active(&self, active: bool) -> bool {
        self.core.set_active(active)
    }
}

impl LazyMountable for ListGroup {
    fn is_booted(&self) -> bool {
        self.core.gate.is_booted()
    }

    fn boot(&self) -> bool {
        self.core.gate.boot()
    }
}

impl Drop for ListGroup {
    fn drop(&mut self) {
        // Unregister before anything else so no broadcast can reach a
        // half-destroyed group.
        self.core.parent.unregister(self.core.id);
        if let Some(route) = self.route.take() {
            route.cancel();
        }
        debug!("{} unmounted", self.core.id);
    }
}
