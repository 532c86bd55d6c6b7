// SPDX-License-Identifier: MPL-2.0
//! Well-known tag identifiers.

/// Latitude as (degrees, minutes, seconds).
pub const GPS_LATITUDE: &str = "gps_latitude";
/// Latitude hemisphere reference (`N` or `S`).
pub const GPS_LATITUDE_REF: &str = "gps_latitude_ref";
/// Longitude as (degrees, minutes, seconds).
pub const GPS_LONGITUDE: &str = "gps_longitude";
/// Longitude hemisphere reference (`E` or `W`).
pub const GPS_LONGITUDE_REF: &str = "gps_longitude_ref";
