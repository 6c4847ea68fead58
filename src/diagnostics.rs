//! Verbose mode and the warning log.
//!
//! Advisory messages (currently only deprecation notices) are written to a
//! single diagnostic stream, and only while verbose mode is on. The
//! process-wide state here belongs to the host; library code that warns takes
//! a [`Diagnostics`] value so it can be driven without touching that state.

use std::env;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Environment variable read by [`Diagnostics::from_env`].
pub const VERBOSE_ENV: &str = "SQLITE3_VERBOSE";

static VERBOSE: AtomicBool = AtomicBool::new(false);
static SINK: RwLock<Option<fn(&str)>> = RwLock::new(None);

/// Where warning lines go.
#[derive(Clone, Copy, Debug, Default)]
pub enum Sink {
    /// The process's standard error stream.
    #[default]
    Stderr,
    /// A callback receiving each line without its trailing newline.
    Callback(fn(&str)),
}

/// A snapshot of the verbose flag and the sink to warn into.
#[derive(Clone, Copy, Debug, Default)]
pub struct Diagnostics {
    pub verbose: bool,
    pub sink: Sink,
}

impl Diagnostics {
    /// Verbose diagnostics writing to `sink`.
    #[must_use]
    pub const fn verbose(sink: Sink) -> Diagnostics {
        Diagnostics {
            verbose: true,
            sink,
        }
    }

    /// Diagnostics that never write anything.
    #[must_use]
    pub const fn quiet() -> Diagnostics {
        Diagnostics {
            verbose: false,
            sink: Sink::Stderr,
        }
    }

    /// The process-wide settings established by [`set_verbose`] and
    /// [`config_sink`].
    #[must_use]
    pub fn current() -> Diagnostics {
        let sink = match *SINK.read().unwrap_or_else(|e| e.into_inner()) {
            Some(callback) => Sink::Callback(callback),
            None => Sink::Stderr,
        };
        Diagnostics {
            verbose: is_verbose(),
            sink,
        }
    }

    /// Verbose to stderr if `SQLITE3_VERBOSE` is set to something other than
    /// an empty string, `0` or `false`.
    #[must_use]
    pub fn from_env() -> Diagnostics {
        let verbose = env::var_os(VERBOSE_ENV).map_or(false, |v| flag_enabled(&v.to_string_lossy()));
        Diagnostics {
            verbose,
            sink: Sink::Stderr,
        }
    }

    /// Writes `msg` as one line when verbose, otherwise does nothing.
    /// Returns whether a line was written.
    pub fn warn(&self, msg: &str) -> bool {
        if !self.verbose {
            return false;
        }
        match self.sink {
            Sink::Stderr => {
                let _ = writeln!(io::stderr().lock(), "{msg}");
            }
            Sink::Callback(callback) => callback(msg),
        }
        true
    }
}

fn flag_enabled(value: &str) -> bool {
    let v = value.trim();
    !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
}

/// Turns process-wide verbose mode on or off.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Whether process-wide verbose mode is on.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Set up the process-wide warning callback. `None` restores stderr.
///
/// The callback may be invoked from any thread.
pub fn config_sink(callback: Option<fn(&str)>) {
    *SINK.write().unwrap_or_else(|e| e.into_inner()) = callback;
}
