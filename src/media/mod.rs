// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the metadata ports.
//!
//! - [`metadata`]: EXIF decoding with `kamadak-exif` ([`ExifContainer`], [`ExifDecoder`])
//! - [`memory`]: an in-memory container ([`MemoryContainer`])

pub mod memory;
pub mod metadata;

// Re-export commonly used types
pub use memory::MemoryContainer;
pub use metadata::{ExifContainer, ExifDecoder};
