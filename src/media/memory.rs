// SPDX-License-Identifier: MPL-2.0
//! In-memory metadata container.
//!
//! Lets presentation layers and tests describe a container directly, tag by
//! tag, including tags that are declared but unreadable.

use crate::application::port::MetadataContainer;
use crate::domain::error::ReadError;
use crate::domain::metadata::TagValue;
use indexmap::IndexMap;

/// A [`MetadataContainer`] backed by an insertion-ordered map.
///
/// # Example
///
/// ```
/// use exif_lens::application::port::MetadataContainer;
/// use exif_lens::media::memory::MemoryContainer;
///
/// let container = MemoryContainer::new()
///     .with_tag("artist", "Alice")
///     .with_tag("gps_latitude", [48.0, 51.0, 24.0]);
///
/// assert!(container.has_exif());
/// assert!(container.has_geodata());
/// assert_eq!(container.try_get("artist").unwrap().to_string(), "Alice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    tags: IndexMap<String, Result<TagValue, ReadError>>,
}

impl MemoryContainer {
    /// Creates an empty container (no EXIF).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a readable tag. Re-declaring a tag replaces its value and
    /// keeps its position.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(name.into(), Ok(value.into()));
        self
    }

    /// Declares a tag whose value cannot be decoded.
    #[must_use]
    pub fn with_unreadable(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        let error = ReadError::undecodable(name.clone(), reason);
        self.tags.insert(name, Err(error));
        self
    }
}

impl MetadataContainer for MemoryContainer {
    fn list_all(&self) -> Vec<String> {
        self.tags.keys().cloned().collect()
    }

    fn try_get(&self, tag: &str) -> Result<TagValue, ReadError> {
        self.tags
            .get(tag)
            .cloned()
            .unwrap_or_else(|| Err(ReadError::NotDeclared(tag.to_string())))
    }

    fn has_exif(&self) -> bool {
        !self.tags.is_empty()
    }
}
