/// Enum listing possible errors from this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A named constant was requested that the namespace does not define and
    /// that is not a known legacy alias.
    #[error("uninitialized constant SQLite3::{0}")]
    UndefinedSymbol(String),
    /// A string could not be parsed as `MAJOR.MINOR.TINY[.BUILD]`.
    #[error("invalid version string: `{0}`")]
    InvalidVersion(String),
}

/// A typedef of the result returned by many methods.
pub type Result<T, E = Error> = std::result::Result<T, E>;
