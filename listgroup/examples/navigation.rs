//! Navigation sidebar demo.
//!
//! Builds a small sidebar with two top-level sections and a nested
//! sub-group, then drives it with route changes and clicks while printing
//! the resulting state.

use listgroup::prelude::*;
use simplelog::{Config, LevelFilter, SimpleLogger};

struct Section {
    title: &'static str,
    group: ListGroup,
    items: LazyContent<Vec<String>>,
}

impl Section {
    fn new(title: &'static str, group: ListGroup, items: &'static [&'static str]) -> Self {
        Self {
            title,
            group,
            items: LazyContent::new(move || items.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn print(&mut self, depth: usize) {
        let header = self.group.header();
        let indicator = if header.classes.active { "▼" } else { "▶" };
        let icon = header
            .prepend_icon
            .map(|slot| format!("{} ", slot.icon))
            .unwrap_or_default();
        println!("{}{} {}{}", "  ".repeat(depth), indicator, icon, self.title);

        let items = self.group.items(&mut self.items);
        if items.visible
            && let Some(items) = items.content
        {
            for item in items.iter() {
                println!("{}  - {}", "  ".repeat(depth), item);
            }
        }
    }
}

fn print_sidebar(label: &str, sections: &mut [(Section, usize)]) {
    println!("\n== {label}");
    for (section, depth) in sections.iter_mut() {
        section.print(*depth);
    }
}

fn main() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let router = RouteMatcher::new("/");
    let sidebar = ListContainer::new();

    let users = ListGroup::builder()
        .prepend_icon("$account")
        .group("^/users")
        .parent(&sidebar)
        .router(&router)
        .mount();
    let settings = ListGroup::builder()
        .group("^/users/settings")
        .sub_group(true)
        .parent(&sidebar)
        .router(&router)
        .mount();
    let orders = ListGroup::builder()
        .prepend_icon("$cart")
        .group("^/orders")
        .parent(&sidebar)
        .router(&router)
        .mount();

    let mut sections = [
        (Section::new("Users", users, &["All users", "Invite"]), 0),
        (Section::new("Settings", settings, &["Profile", "Security"]), 1),
        (Section::new("Orders", orders, &["Open", "Shipped"]), 0),
    ];

    print_sidebar("start", &mut sections);

    router.navigate("/users/settings/profile");
    print_sidebar("navigate /users/settings/profile", &mut sections);

    sections[2].0.group.click();
    print_sidebar("click Orders", &mut sections);

    router.navigate("/orders/17");
    print_sidebar("navigate /orders/17", &mut sections);
}
