//! This file contains tests for the legacy `Version` lookup against the
//! process-wide diagnostics state. That state is shared by the whole process
//! and so is not safe to change from a normal #[test] in the library.

#[macro_use]
extern crate lazy_static;

use std::sync::Mutex;

use regex::Regex;
use sqlite3_version::{diagnostics, lookup, resolve_legacy_name, structured_version, Constant, Error};

lazy_static! {
    static ref LINES_RECEIVED: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

fn line_handler(line: &str) {
    let mut lines_received = LINES_RECEIVED.lock().unwrap();
    lines_received.push(line.to_owned());
}

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *LINES_RECEIVED.lock().unwrap())
}

fn main() {
    diagnostics::config_sink(Some(line_handler));

    diagnostics::set_verbose(false);
    let v = resolve_legacy_name("Version").unwrap();
    assert!(std::ptr::eq(v, structured_version()));
    assert!(take_lines().is_empty());

    diagnostics::set_verbose(true);
    let v = resolve_legacy_name("Version").unwrap();
    assert_eq!(v.string(), "1.5.0.rc2");
    let lines = take_lines();
    assert_eq!(lines.len(), 1);
    let re = Regex::new(
        r"^.*legacy_warning\.rs:\d+:\d+: SQLite3::Version will be removed in sqlite3 version 2\.0\.0$",
    )
    .unwrap();
    assert!(re.is_match(&lines[0]), "{}", lines[0]);

    assert_eq!(
        lookup("Version").unwrap(),
        Constant::Version(structured_version())
    );
    assert_eq!(take_lines().len(), 1);

    // Names the namespace defines or does not claim never warn.
    assert_eq!(lookup("VERSION").unwrap(), Constant::Str("1.5.0.rc2"));
    assert_eq!(
        resolve_legacy_name("Statement").unwrap_err(),
        Error::UndefinedSymbol("Statement".to_owned())
    );
    assert!(take_lines().is_empty());

    diagnostics::config_sink(None);
    diagnostics::set_verbose(false);
    resolve_legacy_name("Version").unwrap();
    assert!(take_lines().is_empty());
}
