// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`ReadError`](error::ReadError),
//!   [`GeoError`](error::GeoError))
//! - [`metadata`]: Metadata types ([`TagValue`](metadata::TagValue),
//!   [`TagEntry`](metadata::TagEntry), [`GeoPoint`](metadata::GeoPoint))

pub mod error;
pub mod metadata;
