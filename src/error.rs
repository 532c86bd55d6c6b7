// SPDX-License-Identifier: MPL-2.0
//! Crate-level errors for I/O, decoding, configuration and command-line use.
//!
//! Tag-level failures are not represented here: they are recoverable domain
//! outcomes ([`ReadError`](crate::domain::error::ReadError),
//! [`GeoError`](crate::domain::error::GeoError)).

use crate::application::port::MetadataError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Metadata(MetadataError),
    Config(String),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Error::Metadata(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
