// SPDX-License-Identifier: MPL-2.0
//! GPS position derivation errors.

use std::fmt;

/// A GPS position could not be derived from an image's tags.
///
/// GPS absence is an expected, terminal condition for a given image; callers
/// suppress the map rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// One of the required GPS tags is absent or unreadable.
    MissingTag(String),

    /// A coordinate tag is not a 3-element sequence of numbers.
    /// Holds the tag name and the observed value.
    MalformedCoordinate(String, String),

    /// A reference tag is not one of `N`, `S`, `E`, `W`.
    /// Holds the tag name and the observed value.
    InvalidReference(String, String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::MissingTag(tag) => write!(f, "GPS tag '{tag}' is missing or unreadable"),
            GeoError::MalformedCoordinate(tag, value) => write!(
                f,
                "GPS tag '{tag}' is not a (degrees, minutes, seconds) triple: {value}"
            ),
            GeoError::InvalidReference(tag, value) => {
                write!(f, "GPS tag '{tag}' has an invalid hemisphere reference: {value}")
            }
        }
    }
}

impl std::error::Error for GeoError {}
