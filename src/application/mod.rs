// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`catalog`]: Tag enumeration and read-probing (`TagCatalog`)
//! - [`staging`]: Pending edits of a session (`EditStaging`)
//! - [`geo`]: GPS position derivation and the travel-map gazetteer
//!
//! # Control Flow
//!
//! The catalog is queried first to learn which tags exist and which are
//! modifiable. Staging consumes user-submitted values keyed by tag name and
//! filters them against current values. Position derivation runs
//! independently whenever GPS tags are present.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure (`media`) implements application layer ports
//! - Presentation layers use application layer services
//!
//! # Example
//!
//! ```
//! use exif_lens::application::{catalog::TagCatalog, geo, staging::EditStaging};
//! use exif_lens::media::memory::MemoryContainer;
//!
//! let container = MemoryContainer::new()
//!     .with_tag("artist", "Alice")
//!     .with_unreadable("gps_latitude", "zero denominator");
//!
//! let catalog = TagCatalog::new(&container);
//! assert_eq!(catalog.modifiable_tags(), vec!["artist"]);
//!
//! let mut staging = EditStaging::new();
//! let applied = staging.submit_batch(&catalog, [("artist", "Bob"), ("gps_latitude", "ignored")]);
//! assert_eq!(applied, 1);
//! assert_eq!(staging.get("artist"), Some("Bob"));
//!
//! assert!(geo::extract_position(&container).is_err());
//! ```

pub mod catalog;
pub mod geo;
pub mod port;
pub mod staging;
