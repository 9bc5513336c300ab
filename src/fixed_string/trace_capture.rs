//! A `log` sink that records the crate's trace output per test thread.

use alloc::{
    string::{String, ToString as _},
    vec::Vec,
};
use core::cell::RefCell;
use std::sync::Once;

std::thread_local! {
    static RECORDS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl log::Log for Capture {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.target() == "fixed_string"
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            RECORDS.with(|records| records.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Runs `f` and returns the messages it logged under the `fixed_string` target.
pub(crate) fn capture_traces(f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(RefCell::take)
}
