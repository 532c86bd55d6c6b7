// SPDX-License-Identifier: MPL-2.0
//! Tag read errors.

use std::fmt;

/// A tag could not be read from a metadata container.
///
/// Always recovered locally: the tag is excluded from the modifiable set
/// or reported as a warning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The container does not declare this tag.
    NotDeclared(String),

    /// The tag is declared but its value could not be decoded.
    Undecodable {
        /// Tag identifier.
        tag: String,
        /// Decoder-provided reason.
        reason: String,
    },
}

impl ReadError {
    /// Creates an `Undecodable` error.
    pub fn undecodable(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ReadError::Undecodable {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Returns the tag this error refers to.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            ReadError::NotDeclared(tag) | ReadError::Undecodable { tag, .. } => tag,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotDeclared(tag) => write!(f, "tag '{tag}' is not present"),
            ReadError::Undecodable { tag, reason } => {
                write!(f, "tag '{tag}' cannot be decoded: {reason}")
            }
        }
    }
}

impl std::error::Error for ReadError {}
