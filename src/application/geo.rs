// SPDX-License-Identifier: MPL-2.0
//! GPS position derivation.
//!
//! Converts EXIF degrees/minutes/seconds angles into signed decimal degrees
//! and provides the fixed gazetteer behind the travel map.

use crate::application::port::MetadataContainer;
use crate::domain::error::GeoError;
use crate::domain::metadata::{tags, Dms, GeoPoint, Hemisphere, TagValue};
use tracing::{debug, warn};

/// Converts a DMS angle to signed decimal degrees.
///
/// `degrees + minutes / 60 + seconds / 3600`, negated for `S` and `W`.
/// No clamping or range validation is performed.
#[must_use]
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> f64 {
    Dms::new(degrees, minutes, seconds, hemisphere).to_decimal()
}

/// Derives an image's position from its four GPS tags.
///
/// # Errors
///
/// - [`GeoError::MissingTag`] if any of the four tags is absent or unreadable
/// - [`GeoError::MalformedCoordinate`] if a coordinate is not a 3-element
///   numeric sequence, or converts outside [-90, 90] (latitude) or
///   [-180, 180] (longitude)
/// - [`GeoError::InvalidReference`] if a reference is not `N`/`S`/`E`/`W`
pub fn extract_position<C>(container: &C) -> Result<GeoPoint, GeoError>
where
    C: MetadataContainer + ?Sized,
{
    let result = read_axis(container, tags::GPS_LATITUDE, tags::GPS_LATITUDE_REF, 90.0)
        .and_then(|latitude| {
            read_axis(container, tags::GPS_LONGITUDE, tags::GPS_LONGITUDE_REF, 180.0)
                .map(|longitude| GeoPoint::new(latitude, longitude))
        });

    match &result {
        Ok(point) => debug!(position = %point.format(), "GPS position extracted"),
        Err(e) => warn!(error = %e, "no usable GPS position"),
    }
    result
}

/// Reads one axis as signed decimal degrees within `[-limit, limit]`.
fn read_axis<C>(
    container: &C,
    coordinate_tag: &str,
    reference_tag: &str,
    limit: f64,
) -> Result<f64, GeoError>
where
    C: MetadataContainer + ?Sized,
{
    let coordinate = read_required(container, coordinate_tag)?;
    let reference = read_required(container, reference_tag)?;

    let malformed =
        || GeoError::MalformedCoordinate(coordinate_tag.to_string(), coordinate.to_string());

    let components = coordinate
        .as_floats()
        .filter(|values| values.len() == 3)
        .ok_or_else(malformed)?;

    let hemisphere = reference
        .as_text()
        .and_then(Hemisphere::from_ref)
        .ok_or_else(|| {
            GeoError::InvalidReference(reference_tag.to_string(), reference.to_string())
        })?;

    Dms::from_components(components, hemisphere)
        .map(|dms| dms.to_decimal())
        .filter(|decimal| (-limit..=limit).contains(decimal))
        .ok_or_else(malformed)
}

fn read_required<C>(container: &C, tag: &str) -> Result<TagValue, GeoError>
where
    C: MetadataContainer + ?Sized,
{
    container
        .try_get(tag)
        .map_err(|_| GeoError::MissingTag(tag.to_string()))
}

/// Stops of the travel map, in route order: (label, latitude, longitude).
const GAZETTEER: [(&str, f64, f64); 10] = [
    ("Paris", 48.8566, 2.3522),
    ("Lyon", 45.7640, 4.8357),
    ("Barcelona", 41.3874, 2.1686),
    ("Lisbon", 38.7223, -9.1393),
    ("Marrakesh", 31.6295, -7.9811),
    ("Rome", 41.9028, 12.4964),
    ("Athens", 37.9838, 23.7275),
    ("Istanbul", 41.0082, 28.9784),
    ("Cairo", 30.0444, 31.2357),
    ("Reykjavik", 64.1466, -21.9426),
];

/// Returns the fixed list of labeled travel-map locations.
///
/// The order is the route's polyline order. These points are reference data,
/// not derived from any image.
#[must_use]
pub fn static_gazetteer() -> Vec<GeoPoint> {
    GAZETTEER
        .iter()
        .map(|&(label, latitude, longitude)| GeoPoint::labeled(label, latitude, longitude))
        .collect()
}
