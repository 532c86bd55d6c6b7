// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides pure domain types for image metadata:
//! - [`TagValue`] / [`TagEntry`]: decoded tag values and catalog snapshots
//! - [`Hemisphere`] / [`Dms`]: GPS angles as stored in EXIF
//! - [`GeoPoint`]: signed decimal-degree positions for map renderers
//! - [`tags`]: well-known tag identifiers

pub mod tags;
mod types;

pub use types::{Dms, GeoPoint, Hemisphere, TagEntry, TagValue};
