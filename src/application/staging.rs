// SPDX-License-Identifier: MPL-2.0
//! Edit staging: the pending (tag -> proposed value) set of a session.
//!
//! Staged edits are never written back into the image. A staging value is
//! owned by the caller for the duration of one editing session; starting a
//! new session means creating a new [`EditStaging`].

use crate::application::catalog::TagCatalog;
use crate::application::port::MetadataContainer;
use crate::error::Result;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// Returns whether `proposed` is a real edit of a tag whose current
/// stringified value is `current` (`None` when the tag is unreadable).
///
/// An edit is effective iff it is non-empty and differs from the current value.
#[must_use]
pub fn is_effective_edit(proposed: &str, current: Option<&str>) -> bool {
    !proposed.is_empty() && current != Some(proposed)
}

/// Pending edits for one session, keyed by tag name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStaging {
    edits: BTreeMap<String, String>,
}

impl EditStaging {
    /// Starts an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a batch of candidate values keyed by tag name.
    ///
    /// For each pair whose tag is currently modifiable, the tag is re-read
    /// and the value staged only if it is an effective edit (see
    /// [`is_effective_edit`]). A read failure during the re-read counts as
    /// "no current value" and never aborts the batch. Rejected values leave
    /// any existing staged value untouched. Keys naming tags outside the
    /// modifiable set are ignored.
    ///
    /// Returns the number of staged entries that were created or changed.
    pub fn submit_batch<C, I, K, V>(&mut self, catalog: &TagCatalog<'_, C>, batch: I) -> usize
    where
        C: MetadataContainer + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let modifiable: HashSet<String> = catalog.modifiable_tags().into_iter().collect();
        let mut applied = 0;

        for (tag, proposed) in batch {
            let tag = tag.as_ref();
            let proposed = proposed.into();

            if !modifiable.contains(tag) {
                debug!(tag, "ignoring edit for a tag outside the modifiable set");
                continue;
            }

            let current = catalog.probe_readable(tag).ok().map(|v| v.to_string());
            if !is_effective_edit(&proposed, current.as_deref()) {
                debug!(tag, "skipping empty or unchanged value");
                continue;
            }

            if self.edits.get(tag) == Some(&proposed) {
                debug!(tag, "value already staged");
                continue;
            }

            debug!(tag, value = %proposed, "staging edit");
            self.edits.insert(tag.to_string(), proposed);
            applied += 1;
        }

        info!(applied, staged = self.edits.len(), "edit batch submitted");
        applied
    }

    /// Returns a read-only view of the staged edits.
    #[must_use]
    pub fn get_staged(&self) -> &BTreeMap<String, String> {
        &self.edits
    }

    /// Returns the staged value for a tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.edits.get(tag).map(String::as_str)
    }

    /// Number of staged edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` when nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Serializes the staged edits as a TOML table, for display or export.
    ///
    /// # Errors
    ///
    /// Returns a config error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&self.edits)?)
    }
}
