// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Whether unreadable tags are listed alongside modifiable ones.
pub const DEFAULT_SHOW_UNREADABLE_TAGS: bool = false;

// ==========================================================================
// Coordinate Display Defaults
// ==========================================================================

/// Default number of decimals when displaying decimal degrees.
pub const DEFAULT_COORDINATE_PRECISION: usize = 6;

/// Maximum number of decimals when displaying decimal degrees.
pub const MAX_COORDINATE_PRECISION: usize = 10;
