use std::sync::{Arc, Mutex};

use listgroup::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

struct Nav {
    router: RouteMatcher,
    list: ListContainer,
}

impl Nav {
    fn new(path: &str) -> Self {
        init_logging();
        Self {
            router: RouteMatcher::new(path),
            list: ListContainer::new(),
        }
    }

    fn group(&self, pattern: &str) -> ListGroup {
        ListGroup::builder()
            .group(pattern)
            .parent(&self.list)
            .router(&self.router)
            .mount()
    }
}

#[test]
fn test_route_activates_matching_group() {
    let nav = Nav::new("/");
    let users = nav.group("/users");
    let orders = nav.group("/orders");

    nav.router.navigate("/users/42");

    assert!(users.is_active());
    assert!(!orders.is_active());
    assert!(users.is_materialized());
    assert!(!orders.is_materialized());
}

#[test]
fn test_route_moves_selection() {
    let nav = Nav::new("/");
    let users = nav.group("/users");
    let orders = nav.group("/orders");

    nav.router.navigate("/users");
    nav.router.navigate("/orders/7");

    assert!(!users.is_active());
    assert!(orders.is_active());
}

#[test]
fn test_non_matching_route_collapses() {
    let nav = Nav::new("/");
    let users = nav.group("/users");

    nav.router.navigate("/users");
    assert!(users.is_active());

    nav.router.navigate("/settings");
    assert!(!users.is_active());
    // Content stays built while collapsed.
    assert!(users.is_materialized());
}

#[test]
fn test_route_match_collapses_group_without_pattern() {
    let nav = Nav::new("/");
    let users = nav.group("/users");
    let plain = ListGroup::builder()
        .parent(&nav.list)
        .router(&nav.router)
        .mount();

    plain.click();
    assert!(plain.is_active());

    nav.router.navigate("/users");
    assert!(users.is_active());
    assert!(!plain.is_active());
}

#[test]
fn test_group_without_pattern_ignores_routes() {
    let nav = Nav::new("/");
    let plain = ListGroup::builder()
        .parent(&nav.list)
        .router(&nav.router)
        .mount();

    plain.click();
    nav.router.navigate("/anything");
    assert!(plain.is_active());
    assert!(!plain.route_changed("/other"));
    assert_eq!(nav.router.listener_count(), 0);
}

#[test]
fn test_disabled_group_follows_route() {
    let nav = Nav::new("/");
    let group = ListGroup::builder()
        .group("/reports")
        .disabled(true)
        .parent(&nav.list)
        .router(&nav.router)
        .mount();

    group.click();
    assert!(!group.is_active());

    nav.router.navigate("/reports/q3");
    assert!(group.is_active());
}

#[test]
fn test_initial_route_evaluated_on_mount() {
    let nav = Nav::new("/orders/7");
    let users = nav.group("/users");
    let orders = nav.group("/orders");

    assert!(!users.is_active());
    assert!(orders.is_active());
}

#[test]
fn test_initial_route_match_collapses_earlier_sibling() {
    let nav = Nav::new("/orders");
    let open = ListGroup::builder().value(true).parent(&nav.list).mount();
    let orders = nav.group("/orders");

    assert!(orders.is_active());
    assert!(!open.is_active());
}

#[test]
fn test_explicit_value_skips_initial_route() {
    let nav = Nav::new("/users");
    let users = ListGroup::builder()
        .group("/users")
        .value(false)
        .parent(&nav.list)
        .router(&nav.router)
        .mount();

    assert!(!users.is_active());

    nav.router.navigate("/users/1");
    assert!(users.is_active());
}

#[test]
fn test_sub_group_follows_route_without_broadcast() {
    let nav = Nav::new("/");
    let top = ListGroup::builder().parent(&nav.list).mount();
    let nested = ListGroup::builder()
        .group("/users/settings")
        .sub_group(true)
        .parent(&nav.list)
        .router(&nav.router)
        .mount();

    top.click();
    nav.router.navigate("/users/settings/profile");

    assert!(nested.is_active());
    assert!(top.is_active());
}

#[test]
fn test_broadcast_precedes_local_flip() {
    let nav = Nav::new("/");
    let users = ListGroup::builder().parent(&nav.list).mount();
    let orders = nav.group("/orders");
    users.click();

    // With orders out of the registry, its own flip can only come from the
    // local assignment after the broadcast.
    nav.list.unregister(orders.id());

    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    users.on_change(move |active| sink.lock().unwrap().push(("users", active)));
    let sink = Arc::clone(&log);
    orders.on_change(move |active| sink.lock().unwrap().push(("orders", active)));

    nav.router.navigate("/orders");

    assert_eq!(
        *log.lock().unwrap(),
        vec![("users", false), ("orders", true)]
    );
}

#[test]
fn test_malformed_pattern_never_matches() {
    let nav = Nav::new("/");
    let broken = nav.group("/users/(");

    assert!(broken.pattern().is_some_and(|p| !p.is_valid()));
    nav.router.navigate("/users/(");
    nav.router.navigate("/users/1");
    assert!(!broken.is_active());

    // Local toggling still works.
    assert!(broken.click());
    assert!(broken.is_active());
}

#[test]
fn test_dropped_group_unsubscribes_from_router() {
    let nav = Nav::new("/");
    let users = nav.group("/users");
    assert_eq!(nav.router.listener_count(), 1);

    drop(users);
    assert_eq!(nav.router.listener_count(), 0);
    assert!(nav.list.is_empty());
    nav.router.navigate("/users");
}

#[test]
fn test_same_path_is_not_a_route_change() {
    let nav = Nav::new("/");
    let users = nav.group("/users");

    nav.router.navigate("/users");
    users.click();
    assert!(!users.is_active());

    assert!(!nav.router.navigate("/users"));
    assert!(!users.is_active());
}
