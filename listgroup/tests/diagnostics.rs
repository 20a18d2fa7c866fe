use std::sync::atomic::{AtomicUsize, Ordering};

use listgroup::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Counts warnings emitted by this crate.
struct WarnCounter {
    warnings: AtomicUsize,
}

impl Log for WarnCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if record.level() == Level::Warn && record.target().starts_with("listgroup") {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static COUNTER: WarnCounter = WarnCounter {
    warnings: AtomicUsize::new(0),
};

#[test]
fn test_malformed_pattern_warns_once() {
    log::set_logger(&COUNTER).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let broken = RoutePattern::new("(");
    assert!(!broken.matches("/"));
    assert!(!broken.matches("/users"));
    assert!(!broken.matches("("));
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 1);

    let valid = RoutePattern::new("/users");
    assert!(valid.matches("/users/1"));
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 1);
}
