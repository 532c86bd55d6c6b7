// SPDX-License-Identifier: MPL-2.0
//! Tag catalog: enumeration and read-probing of container tags.
//!
//! The catalog answers which tags a container declares and which of them are
//! candidates for modification. A tag is considered modifiable when its value
//! can be read. This is a conservative heuristic: it does not guarantee that
//! the underlying format can actually write that tag.

use crate::application::port::MetadataContainer;
use crate::domain::error::ReadError;
use crate::domain::metadata::{TagEntry, TagValue};
use tracing::{debug, warn};

/// Read-only view over a decoded metadata container.
///
/// Every query re-reads the container; nothing is cached.
///
/// # Example
///
/// ```
/// use exif_lens::application::catalog::TagCatalog;
/// use exif_lens::media::memory::MemoryContainer;
///
/// let container = MemoryContainer::new()
///     .with_tag("artist", "Alice")
///     .with_unreadable("maker_note", "opaque binary payload");
/// let catalog = TagCatalog::new(&container);
///
/// assert_eq!(catalog.list_tags(), vec!["artist", "maker_note"]);
/// assert_eq!(catalog.modifiable_tags(), vec!["artist"]);
/// ```
pub struct TagCatalog<'a, C: MetadataContainer + ?Sized> {
    container: &'a C,
}

impl<C: MetadataContainer + ?Sized> Clone for TagCatalog<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: MetadataContainer + ?Sized> Copy for TagCatalog<'_, C> {}

impl<'a, C: MetadataContainer + ?Sized> TagCatalog<'a, C> {
    /// Creates a catalog over the given container.
    #[must_use]
    pub fn new(container: &'a C) -> Self {
        Self { container }
    }

    /// Returns the underlying container.
    #[must_use]
    pub fn container(&self) -> &'a C {
        self.container
    }

    /// Returns every tag identifier the container declares, in its native order.
    #[must_use]
    pub fn list_tags(&self) -> Vec<String> {
        self.container.list_all()
    }

    /// Attempts to read a tag's current value.
    ///
    /// # Errors
    ///
    /// Returns the container's [`ReadError`] when the tag cannot be read.
    pub fn probe_readable(&self, tag: &str) -> Result<TagValue, ReadError> {
        let result = self.container.try_get(tag);
        if let Err(e) = &result {
            debug!(tag, error = %e, "tag probe failed");
        }
        result
    }

    /// Returns the declared tags whose value can currently be read.
    ///
    /// A failing tag is skipped; enumeration of the remaining tags continues.
    #[must_use]
    pub fn modifiable_tags(&self) -> Vec<String> {
        self.list_tags()
            .into_iter()
            .filter(|tag| self.probe_readable(tag).is_ok())
            .collect()
    }

    /// Returns a snapshot entry for every declared tag.
    #[must_use]
    pub fn entries(&self) -> Vec<TagEntry> {
        self.list_tags()
            .into_iter()
            .map(|name| {
                let current_value = self.probe_readable(&name).ok().map(|v| v.to_string());
                TagEntry {
                    readable: current_value.is_some(),
                    name,
                    current_value,
                }
            })
            .collect()
    }

    /// Renders a single tag as `"<tag> : <value>"`.
    ///
    /// # Errors
    ///
    /// Returns the [`ReadError`] when the tag cannot be read; see
    /// [`read_warning`] for its display form.
    pub fn describe_tag(&self, tag: &str) -> Result<String, ReadError> {
        self.probe_readable(tag)
            .map(|value| format!("{tag} : {value}"))
            .inspect_err(|e| warn!(tag, error = %e, "tag cannot be displayed"))
    }

    /// Returns `(tag, initial text)` pairs for an edit form.
    ///
    /// One pair per modifiable tag, pre-filled with the current value, or an
    /// empty string if the tag became unreadable since enumeration.
    #[must_use]
    pub fn form_defaults(&self) -> Vec<(String, String)> {
        self.modifiable_tags()
            .into_iter()
            .map(|tag| {
                let text = self
                    .probe_readable(&tag)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                (tag, text)
            })
            .collect()
    }
}

/// Formats a read failure as a user-facing warning line.
#[must_use]
pub fn read_warning(error: &ReadError) -> String {
    format!("Cannot read '{}' ({error})", error.tag())
}
