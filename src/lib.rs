//! Version metadata for the SQLite binding.
//!
//! The binding publishes its release both as a single string and as a
//! structured record:
//!
//! ```rust
//! use sqlite3_version::{library_version, structured_version};
//!
//! assert_eq!(library_version(), "1.5.0.rc2");
//! assert_eq!(structured_version().string(), library_version());
//! ```
//!
//! The structured record used to be published as `SQLite3::Version`. That
//! name still resolves through [`lookup`], warning on the diagnostic stream
//! when verbose mode is on:
//!
//! ```rust
//! use sqlite3_version::{diagnostics, lookup, Constant, Error};
//!
//! diagnostics::set_verbose(false);
//! assert!(matches!(lookup("Version"), Ok(Constant::Version(_))));
//! assert_eq!(
//!     lookup("Nope").unwrap_err(),
//!     Error::UndefinedSymbol("Nope".to_owned())
//! );
//! ```

pub use crate::diagnostics::{Diagnostics, Sink};
pub use crate::error::{Error, Result};
pub use crate::namespace::{
    lookup, lookup_with, resolve_legacy_name, resolve_legacy_name_with, Constant,
    LEGACY_VERSION_NAME,
};
pub use crate::version::*;

pub mod diagnostics;
mod error;
mod namespace;
mod version;
