//! Error types for archive inspection.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `InspectionError`.
pub type Result<T> = std::result::Result<T, InspectionError>;

/// Errors that can occur while reading an archive.
///
/// Every variant is fatal for the current scan: the reader never skips a
/// damaged member and carries on.
#[derive(Error, Debug)]
pub enum InspectionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive path could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Archive path is a symbolic link.
    #[error(
        "symlinks are not supported, please specify the path to the archive: {}",
        path.display()
    )]
    UnsupportedInput {
        /// The symlink path.
        path: PathBuf,
    },

    /// Global signature is missing or does not match `!<arch>\n`.
    #[error("invalid magic number")]
    InvalidMagic,

    /// A member header could not be decoded.
    #[error("invalid member header: {0}")]
    InvalidHeader(String),

    /// Declared member size runs past the end of the archive.
    #[error("truncated member data: expected {expected} bytes, found {actual}")]
    Truncated {
        /// Bytes declared by the member header.
        expected: u64,
        /// Bytes actually available.
        actual: u64,
    },

    /// Buffer allocation or digest computation failed.
    #[error("resource error: {0}")]
    Resource(String),
}

impl InspectionError {
    /// Returns `true` if the archive bytes themselves are malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use arinspect_core::InspectionError;
    ///
    /// assert!(InspectionError::InvalidMagic.is_format_error());
    /// assert!(!InspectionError::Resource("oom".into()).is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic | Self::InvalidHeader(_) | Self::Truncated { .. }
        )
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use arinspect_core::InspectionError;
    ///
    /// let err = InspectionError::InvalidHeader("bad size".to_string());
    /// assert_eq!(err.context(), Some("bad size"));
    ///
    /// let err = InspectionError::InvalidMagic;
    /// assert_eq!(err.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidHeader(msg) | Self::Resource(msg) => Some(msg),
            _ => None,
        }
    }
}
