//! Collapsible, nestable groups for hierarchical navigation lists.
//!
//! The pieces, leaves first:
//!
//! - [`route::RouteMatcher`] reports the current navigation path.
//! - [`activation::ActivationState`] is a group's expanded flag.
//! - [`lazy::LazyGate`] remembers whether a group's content was ever built.
//! - [`group::ListGroup`] is the widget, composed of the above.
//! - [`container::ListContainer`] is the enclosing list that keeps at most
//!   one top-level group expanded.

pub mod activation;
pub mod container;
pub mod error;
pub mod group;
pub mod identity;
pub mod lazy;
pub mod route;
pub mod state;

pub use error::RoutePatternError;
pub use group::{GroupBuilder, GroupConfig, ListGroup};

pub mod prelude {
    pub use crate::activation::{Activatable, ActivationState};
    pub use crate::container::{ContainerHandle, ExpandMode, ListContainer, Registrable};
    pub use crate::error::RoutePatternError;
    pub use crate::group::{
        EventResult, GroupBuilder, GroupClasses, GroupConfig, HeaderView, IconSlot, ItemsView,
        ListGroup, Ripple, RippleOptions,
    };
    pub use crate::identity::GroupId;
    pub use crate::lazy::{LazyContent, LazyGate, LazyMountable};
    pub use crate::route::{RouteMatcher, RoutePattern, RouteSubscription};
    pub use crate::state::{State, WatchId};
}
