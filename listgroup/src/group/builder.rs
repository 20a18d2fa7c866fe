//! Builder for [`ListGroup`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use log::debug;

use crate::activation::ActivationState;
use crate::container::{ContainerHandle, ListContainer};
use crate::identity::GroupId;
use crate::lazy::LazyGate;
use crate::route::{RouteMatcher, RoutePattern};

use super::config::{GroupConfig, Ripple};
use super::{GroupCore, ListGroup};

/// A list group builder.
///
/// # Example
///
/// ```
/// use listgroup::prelude::*;
///
/// let list = ListContainer::new();
/// let group = ListGroup::builder()
///     .prepend_icon("$account")
///     .group("^/users")
///     .parent(&list)
///     .mount();
/// assert!(group.is_registered());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    config: GroupConfig,
    parent: ContainerHandle,
    router: Option<RouteMatcher>,
}

impl GroupBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a full configuration.
    pub fn from_config(config: GroupConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Set the class applied to the prepend icon while active.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.config.active_class = class.into();
        self
    }

    /// Set the icon after the header. An empty string hides it.
    pub fn append_icon(mut self, icon: impl Into<String>) -> Self {
        self.config.append_icon = icon.into();
        self
    }

    /// Set the icon before the header.
    pub fn prepend_icon(mut self, icon: impl Into<String>) -> Self {
        self.config.prepend_icon = Some(icon.into());
        self
    }

    /// Ignore clicks and the activation key.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the route pattern.
    pub fn group(mut self, pattern: impl Into<String>) -> Self {
        self.config.group = Some(pattern.into());
        self
    }

    /// Render items without the action indent.
    pub fn no_action(mut self, no_action: bool) -> Self {
        self.config.no_action = no_action;
        self
    }

    /// Set the ripple feedback.
    pub fn ripple(mut self, ripple: impl Into<Ripple>) -> Self {
        self.config.ripple = ripple.into();
        self
    }

    /// Mark the group as a sub-group.
    pub fn sub_group(mut self, sub_group: bool) -> Self {
        self.config.sub_group = sub_group;
        self
    }

    /// Build the nested content immediately.
    pub fn eager(mut self, eager: bool) -> Self {
        self.config.eager = eager;
        self
    }

    /// Set the initial state explicitly.
    pub fn value(mut self, active: bool) -> Self {
        self.config.value = Some(active);
        self
    }

    /// Register with `list` on mount.
    pub fn parent(mut self, list: &ListContainer) -> Self {
        self.parent = list.handle();
        self
    }

    /// Register through an existing handle on mount.
    pub fn parent_handle(mut self, handle: ContainerHandle) -> Self {
        self.parent = handle;
        self
    }

    /// Follow route changes reported by `router`.
    pub fn router(mut self, router: &RouteMatcher) -> Self {
        self.router = Some(router.clone());
        self
    }

    /// Mount the group.
    ///
    /// Registration happens first, then the route subscription, then the
    /// initial route evaluation (skipped when an explicit `value` is set).
    pub fn mount(self) -> ListGroup {
        let Self {
            config,
            parent,
            router,
        } = self;

        let initial = config.value.unwrap_or(false);
        let gate = if initial || config.eager {
            LazyGate::booted()
        } else {
            LazyGate::new()
        };

        let core = Arc::new(GroupCore {
            id: GroupId::new(),
            sub_group: config.sub_group,
            disabled: AtomicBool::new(config.disabled),
            pattern: config.group.as_deref().map(RoutePattern::new),
            activation: ActivationState::new(initial),
            gate,
            parent,
        });

        core.parent.register(&core);
        debug!(
            "{} mounted (sub_group: {}, attached: {})",
            core.id,
            core.sub_group,
            core.parent.is_attached()
        );

        let route = match (&router, &core.pattern) {
            (Some(router), Some(_)) => {
                let weak = Arc::downgrade(&core);
                Some(router.subscribe(move |path| {
                    if let Some(core) = weak.upgrade() {
                        core.route_changed(path);
                    }
                }))
            }
            _ => None,
        };

        if let (Some(router), None) = (&router, config.value) {
            core.route_changed(&router.current_path());
        }

        ListGroup {
            core,
            config,
            route,
        }
    }
}
