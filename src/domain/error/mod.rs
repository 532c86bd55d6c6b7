// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns. Both are recoverable:
//! callers decide whether to display or suppress them.

mod geo;
mod read;

pub use geo::GeoError;
pub use read::ReadError;
