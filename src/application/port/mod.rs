// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`metadata`]: Metadata container access and decoding
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `exif` crate types)
//! - Traits are `Send + Sync` so decoded containers can be shared by readers
//! - Fallible methods return `Result` with domain error types

pub mod metadata;

// Re-export main types for convenience
pub use metadata::{MetadataContainer, MetadataDecoder, MetadataError};
