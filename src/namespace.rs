//! Named constants of the `SQLite3` namespace and the fallback for renamed
//! ones.

use std::panic::Location;

use tracing::{debug, trace};

use crate::diagnostics::Diagnostics;
use crate::version::{
    structured_version, Version, BUILD, LEGACY_REMOVAL_VERSION, MAJOR, MINOR, TINY, VERSION,
};
use crate::{Error, Result};

/// The pre-2.0 name of the structured version record.
pub const LEGACY_VERSION_NAME: &str = "Version";

/// A value found by [`lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// A numeric version component.
    Int(u32),
    /// A string constant.
    Str(&'static str),
    /// A string derived at lookup time.
    String(String),
    /// The structured version record.
    Version(&'static Version),
}

/// Resolves `name` against the namespace, falling back to
/// [`resolve_legacy_name`] for anything not defined there.
///
/// Warnings use the process-wide [`Diagnostics::current`].
#[track_caller]
pub fn lookup(name: &str) -> Result<Constant> {
    lookup_with(name, &Diagnostics::current())
}

/// Same as [`lookup`] but warns into `diagnostics`.
#[track_caller]
pub fn lookup_with(name: &str, diagnostics: &Diagnostics) -> Result<Constant> {
    trace!(name, "constant lookup");
    let constant = match name {
        "VERSION" | "VersionProxy::VERSION" => Constant::Str(VERSION),
        "VersionProxy" => Constant::Version(structured_version()),
        "VersionProxy::MAJOR" => Constant::Int(MAJOR),
        "VersionProxy::MINOR" => Constant::Int(MINOR),
        "VersionProxy::TINY" => Constant::Int(TINY),
        "VersionProxy::STRING" => Constant::String(structured_version().string()),
        "VersionProxy::BUILD" => match BUILD {
            Some(build) => Constant::Str(build),
            None => return Err(Error::UndefinedSymbol(name.to_owned())),
        },
        _ => Constant::Version(resolve_legacy_name_with(name, diagnostics)?),
    };
    Ok(constant)
}

/// Fallback for a constant the namespace does not define.
///
/// Only [`LEGACY_VERSION_NAME`] is claimed: it yields the structured version
/// record, warning once per call when verbose mode is on. Every other name
/// is [`Error::UndefinedSymbol`].
#[track_caller]
pub fn resolve_legacy_name(name: &str) -> Result<&'static Version> {
    resolve_legacy_name_with(name, &Diagnostics::current())
}

/// Same as [`resolve_legacy_name`] but warns into `diagnostics`.
#[track_caller]
pub fn resolve_legacy_name_with(name: &str, diagnostics: &Diagnostics) -> Result<&'static Version> {
    if name != LEGACY_VERSION_NAME {
        return Err(Error::UndefinedSymbol(name.to_owned()));
    }
    let caller = Location::caller();
    debug!(%caller, "serving legacy alias SQLite3::{}", LEGACY_VERSION_NAME);
    diagnostics.warn(&deprecation_message(caller));
    Ok(structured_version())
}

/// Worded for this crate (`SQLite3::Version`, `sqlite3`), not the older
/// `SQLite::Version` / `sqlite3-ruby` text.
fn deprecation_message(caller: &Location<'_>) -> String {
    format!(
        "{}:{}:{}: SQLite3::{} will be removed in sqlite3 version {}",
        caller.file(),
        caller.line(),
        caller.column(),
        LEGACY_VERSION_NAME,
        LEGACY_REMOVAL_VERSION
    )
}
