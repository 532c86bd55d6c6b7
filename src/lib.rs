// SPDX-License-Identifier: MPL-2.0
//! `exif_lens` inspects EXIF metadata, stages edits and derives GPS positions.
//!
//! It enumerates the tags of a decoded image, classifies them as readable
//! (and therefore modifiable candidates), keeps a session's pending edits
//! without ever touching the image, and converts GPS angles into signed
//! decimal degrees for map renderers.

#![doc(html_root_url = "https://docs.rs/exif_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
