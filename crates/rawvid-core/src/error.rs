//! Error types for rawvid-core operations.
//!
//! Guessing never fails: "no evidence" is expressed as `None`, not as an
//! error. The [`Error`] enum only covers the places where a caller hands us
//! something we cannot interpret:
//!
//! - Parsing an enumeration from a string that names no member
//! - A path that has no usable file name
//!
//! # Usage
//!
//! ```rust
//! use rawvid_core::{Error, Subsampling};
//!
//! let err = "4:2:0".parse::<Subsampling>().unwrap_err();
//! assert!(matches!(err, Error::UnknownName { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building rawvid inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// A string did not match any registered name of an enumeration.
    ///
    /// Returned by the `FromStr` implementations generated by
    /// [`named_enum!`](crate::named_enum).
    #[error("unknown {kind} name: '{name}'")]
    UnknownName {
        /// Enumeration type name (e.g. "Subsampling")
        kind: &'static str,
        /// The string that failed to parse
        name: String,
    },

    /// Path has no file name component, or it is not valid UTF-8.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// Creates an [`Error::UnknownName`] error.
    #[inline]
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Creates an [`Error::InvalidPath`] error.
    #[inline]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Returns `true` if this is a name lookup error.
    #[inline]
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownName { .. })
    }

    /// Returns `true` if this is a path error.
    #[inline]
    pub fn is_path_error(&self) -> bool {
        matches!(self, Self::InvalidPath(_))
    }
}
