// SPDX-License-Identifier: MPL-2.0
//! Metadata container and decoder port definitions.
//!
//! This module defines the traits the core consumes to inspect decoded image
//! metadata. Infrastructure adapters implement them using libraries like
//! `kamadak-exif`.
//!
//! A container declares a list of tag identifiers and offers an explicit,
//! fallible [`MetadataContainer::try_get`] per tag. A declared tag may still
//! fail to read (maker notes, composite tags the codec cannot decode).

use crate::domain::error::ReadError;
use crate::domain::metadata::{tags, TagValue};
use std::fmt;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while decoding a metadata container.
#[derive(Debug, Clone)]
pub enum MetadataError {
    /// Failed to read metadata from the input.
    ReadFailed(String),

    /// The input format doesn't support metadata.
    UnsupportedFormat,

    /// The metadata in the input is corrupted.
    CorruptedMetadata(String),

    /// The input could not be accessed.
    IoError(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::UnsupportedFormat => write!(f, "Format does not support metadata"),
            MetadataError::CorruptedMetadata(msg) => write!(f, "Corrupted metadata: {msg}"),
            MetadataError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// MetadataContainer Trait
// =============================================================================

/// Port for read-only access to a decoded metadata container.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: a decoded container may be shared
/// by any number of concurrent readers.
///
/// # Example
///
/// ```
/// use exif_lens::application::port::MetadataContainer;
///
/// fn print_artist(container: &impl MetadataContainer) {
///     match container.try_get("artist") {
///         Ok(value) => println!("artist : {value}"),
///         Err(e) => println!("{e}"),
///     }
/// }
/// ```
pub trait MetadataContainer: Send + Sync {
    /// Returns every tag identifier the container declares.
    ///
    /// The order is the container's native enumeration order and must be
    /// stable for the lifetime of the container.
    fn list_all(&self) -> Vec<String>;

    /// Reads the current value of a tag.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] if the tag is not declared or cannot be decoded.
    fn try_get(&self, tag: &str) -> Result<TagValue, ReadError>;

    /// Returns `true` if the source carried an EXIF segment at all.
    fn has_exif(&self) -> bool;

    /// Returns `true` if the container declares GPS position tags.
    fn has_geodata(&self) -> bool {
        self.list_all().iter().any(|tag| tag == tags::GPS_LATITUDE)
    }
}

// =============================================================================
// MetadataDecoder Trait
// =============================================================================

/// Port for decoding raw image bytes into a [`MetadataContainer`].
pub trait MetadataDecoder: Send + Sync {
    /// The container type produced by this decoder.
    type Container: MetadataContainer;

    /// Decodes metadata from raw image bytes.
    ///
    /// Input without any metadata yields an empty container with
    /// [`MetadataContainer::has_exif`] returning `false`.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the metadata structure is corrupted.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Container, MetadataError>;
}
