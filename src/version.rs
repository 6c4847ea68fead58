use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The canonical version string of the binding.
///
/// Kept by hand in step with [`MAJOR`], [`MINOR`], [`TINY`] and [`BUILD`].
pub const VERSION: &str = "1.5.0.rc2";

/// Major version component.
pub const MAJOR: u32 = 1;
/// Minor version component.
pub const MINOR: u32 = 5;
/// Tiny version component.
pub const TINY: u32 = 0;
/// Pre-release tag, if any.
pub const BUILD: Option<&str> = Some("rc2");

/// The release in which the legacy `Version` name goes away.
///
/// Deprecation notices name this crate's `SQLite3` namespace and `sqlite3`
/// release line on purpose, rather than the older `SQLite`/`sqlite3-ruby`
/// wording.
pub const LEGACY_REMOVAL_VERSION: Version = Version::new(2, 0, 0);

static STRUCTURED: Version = Version {
    major: MAJOR,
    minor: MINOR,
    tiny: TINY,
    build: match BUILD {
        Some(build) => Some(Cow::Borrowed(build)),
        None => None,
    },
};

/// A structured version record.
///
/// The string form is always derived from the fields, see
/// [`Version::string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    /// Major version; breaking changes.
    pub major: u32,
    /// Minor version; additions.
    pub minor: u32,
    /// Tiny version; fixes.
    pub tiny: u32,
    /// Optional tag such as a pre-release label. `None` is left out of the
    /// string form entirely.
    pub build: Option<Cow<'static, str>>,
}

impl Version {
    /// A version without a build tag.
    #[inline]
    #[must_use]
    pub const fn new(major: u32, minor: u32, tiny: u32) -> Version {
        Version {
            major,
            minor,
            tiny,
            build: None,
        }
    }

    /// A version carrying a build tag such as `"rc2"`.
    #[inline]
    #[must_use]
    pub const fn with_build(major: u32, minor: u32, tiny: u32, build: &'static str) -> Version {
        Version {
            major,
            minor,
            tiny,
            build: Some(Cow::Borrowed(build)),
        }
    }

    /// Returns the dot-joined components in order, skipping an absent build
    /// tag; e.g., `"1.5.0.rc2"` or `"2.0.0"`.
    #[must_use]
    pub fn string(&self) -> String {
        let mut s = format!("{}.{}.{}", self.major, self.minor, self.tiny);
        if let Some(build) = &self.build {
            s.push('.');
            s.push_str(build);
        }
        s
    }

    /// Returns the numeric components packed as an integer; e.g., `1005000`
    /// for version 1.5.0. The build tag does not participate.
    ///
    /// Same layout as [`sqlite3_libversion_number()`](https://www.sqlite.org/c3ref/libversion.html).
    #[inline]
    #[must_use]
    pub fn version_number(&self) -> u64 {
        u64::from(self.major) * 1_000_000 + u64::from(self.minor) * 1_000 + u64::from(self.tiny)
    }

    /// Parses `MAJOR.MINOR.TINY[.BUILD]`.
    ///
    /// Numeric components must be plain decimal without leading zeros, so
    /// the result always prints back as `s`.
    pub fn parse(s: &str) -> Result<Version> {
        let invalid = || Error::InvalidVersion(s.to_owned());
        let mut parts = s.split('.');
        let mut numeric = || -> Result<u32> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty()
                || !part.bytes().all(|b| b.is_ascii_digit())
                || (part.len() > 1 && part.starts_with('0'))
            {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };
        let major = numeric()?;
        let minor = numeric()?;
        let tiny = numeric()?;
        let build = match parts.next() {
            None => None,
            Some("") => return Err(invalid()),
            Some(build) => Some(Cow::Owned(build.to_owned())),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Version {
            major,
            minor,
            tiny,
            build,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.tiny)?;
        if let Some(build) = &self.build {
            write!(f, ".{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Version> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Version, D::Error> {
        let s = <Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns the canonical library version string.
#[inline]
#[must_use]
pub fn library_version() -> &'static str {
    VERSION
}

/// Returns the structured version record of the library.
#[inline]
#[must_use]
pub fn structured_version() -> &'static Version {
    &STRUCTURED
}
