// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for EXIF tags and geographic positions with no external
//! dependencies.

use std::fmt;

// =============================================================================
// TagValue
// =============================================================================

/// Decoded value of a single metadata tag.
///
/// The [`Display`](fmt::Display) form is the canonical stringification used
/// everywhere a tag value is compared against user input:
///
/// - `Text`: verbatim
/// - `Integer`: decimal
/// - `Float`: shortest round-trip form, whole numbers keep a trailing `.0`
/// - `Floats`: parenthesized, comma separated (`(48.0, 51.0, 24.0)`)
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Character data (EXIF ASCII).
    Text(String),
    /// A single integral value.
    Integer(i64),
    /// A single rational or floating-point value.
    Float(f64),
    /// A sequence of numeric values (e.g. GPS degrees/minutes/seconds).
    Floats(Vec<f64>),
}

impl TagValue {
    /// Returns the text content for `Text` values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric components for `Floats` values.
    #[must_use]
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            TagValue::Floats(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(text) => f.write_str(text),
            TagValue::Integer(value) => write!(f, "{value}"),
            TagValue::Float(value) => write!(f, "{value:?}"),
            TagValue::Floats(values) => {
                f.write_str("(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value:?}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Float(value)
    }
}

impl From<Vec<f64>> for TagValue {
    fn from(values: Vec<f64>) -> Self {
        TagValue::Floats(values)
    }
}

impl<const N: usize> From<[f64; N]> for TagValue {
    fn from(values: [f64; N]) -> Self {
        TagValue::Floats(values.to_vec())
    }
}

// =============================================================================
// TagEntry
// =============================================================================

/// Snapshot of one declared tag, recomputed on every catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Canonical tag identifier (e.g. `gps_latitude`).
    pub name: String,
    /// Whether the value could be read.
    pub readable: bool,
    /// Stringified value when readable.
    pub current_value: Option<String>,
}

// =============================================================================
// Hemisphere / Dms
// =============================================================================

/// Hemisphere reference attached to a GPS angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses an EXIF reference string (`"N"`, `"S"`, `"E"`, `"W"`).
    ///
    /// Surrounding whitespace is ignored. Lowercase letters and anything else
    /// are rejected.
    #[must_use]
    pub fn from_ref(reference: &str) -> Option<Self> {
        let mut chars = reference.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).ok(),
            _ => None,
        }
    }

    /// Returns `true` for the hemispheres that carry a negative sign.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    /// Returns the reference letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            'E' => Ok(Hemisphere::East),
            'W' => Ok(Hemisphere::West),
            _ => Err(c),
        }
    }
}

/// An angle in degrees/minutes/seconds with its hemisphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Creates a new angle.
    #[must_use]
    pub const fn new(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Builds an angle from a 3-element `[degrees, minutes, seconds]` slice.
    #[must_use]
    pub fn from_components(components: &[f64], hemisphere: Hemisphere) -> Option<Self> {
        match *components {
            [degrees, minutes, seconds] => Some(Self::new(degrees, minutes, seconds, hemisphere)),
            _ => None,
        }
    }

    /// Signed decimal degrees. No range validation is performed.
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.hemisphere.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

// =============================================================================
// GeoPoint
// =============================================================================

/// A geographic position in signed decimal degrees (WGS84).
///
/// Latitude lies in [-90, 90] and longitude in [-180, 180] for every point
/// produced by [`extract_position`](crate::application::geo::extract_position)
/// or the gazetteer. The constructors do not clamp; [`GeoPoint::is_in_range`]
/// checks hand-built points.
///
/// # Example
///
/// ```
/// use exif_lens::domain::metadata::GeoPoint;
///
/// let paris = GeoPoint::labeled("Paris", 48.8566, 2.3522);
/// assert!(paris.is_in_range());
/// assert_eq!(paris.format(), "48.856600° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    label: Option<String>,
}

impl GeoPoint {
    /// Creates an unlabeled point.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: None,
        }
    }

    /// Creates a point with a human-readable name.
    #[must_use]
    pub fn labeled(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: Some(label.into()),
        }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Display name, for gazetteer points.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns whether latitude is within [-90, 90] and longitude within [-180, 180].
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Formats the coordinates with six decimals.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        self.format_with_precision(6)
    }

    /// Formats the coordinates with the given number of decimals.
    #[must_use]
    pub fn format_with_precision(&self, precision: usize) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.prec$}° {}, {:.prec$}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
            prec = precision
        )
    }

    /// Generates a URL to view this point on a map.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={}&mlon={}",
            self.latitude, self.longitude
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    #[test]
    fn tag_value_display_matches_canonical_form() {
        assert_eq!(TagValue::from("Alice").to_string(), "Alice");
        assert_eq!(TagValue::Integer(72).to_string(), "72");
        assert_eq!(TagValue::Float(48.0).to_string(), "48.0");
        assert_eq!(TagValue::Float(2.8).to_string(), "2.8");
        assert_eq!(
            TagValue::from([48.0, 51.0, 24.5]).to_string(),
            "(48.0, 51.0, 24.5)"
        );
        assert_eq!(TagValue::Floats(Vec::new()).to_string(), "()");
    }

    #[test]
    fn tag_value_accessors() {
        assert_eq!(TagValue::from("N").as_text(), Some("N"));
        assert!(TagValue::Integer(1).as_text().is_none());
        assert_eq!(
            TagValue::from([1.0, 2.0, 3.0]).as_floats(),
            Some(&[1.0, 2.0, 3.0][..])
        );
        assert!(TagValue::Float(1.0).as_floats().is_none());
    }

    #[test]
    fn hemisphere_from_ref() {
        assert_eq!(Hemisphere::from_ref("N"), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_ref(" S "), Some(Hemisphere::South));
        assert_eq!(Hemisphere::from_ref("E"), Some(Hemisphere::East));
        assert_eq!(Hemisphere::from_ref("W"), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_ref(""), None);
        assert_eq!(Hemisphere::from_ref("NE"), None);
        assert_eq!(Hemisphere::from_ref("X"), None);
    }

    #[test]
    fn hemisphere_rejects_lowercase() {
        for reference in ["n", "s", "e", "w"] {
            assert_eq!(Hemisphere::from_ref(reference), None);
        }
        assert_eq!(Hemisphere::try_from('w'), Err('w'));
    }

    #[test]
    fn hemisphere_sign() {
        assert!(!Hemisphere::North.is_negative());
        assert!(!Hemisphere::East.is_negative());
        assert!(Hemisphere::South.is_negative());
        assert!(Hemisphere::West.is_negative());
        assert_eq!(Hemisphere::West.as_char(), 'W');
    }

    #[test]
    fn dms_from_components_requires_three_values() {
        assert!(Dms::from_components(&[1.0, 2.0], Hemisphere::North).is_none());
        assert!(Dms::from_components(&[1.0, 2.0, 3.0, 4.0], Hemisphere::North).is_none());
        let dms = Dms::from_components(&[40.0, 30.0, 0.0], Hemisphere::South).unwrap();
        assert_abs_diff_eq!(dms.to_decimal(), -40.5, epsilon = F64_EPSILON);
    }

    #[test]
    fn geo_point_range_check() {
        assert!(GeoPoint::new(90.0, -180.0).is_in_range());
        assert!(!GeoPoint::new(90.5, 0.0).is_in_range());
        assert!(!GeoPoint::new(0.0, 181.0).is_in_range());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_in_range());
    }

    #[test]
    fn geo_point_format() {
        let sydney = GeoPoint::new(-33.8688, 151.2093);
        assert_eq!(sydney.format(), "33.868800° S, 151.209300° E");

        let nyc = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(nyc.format_with_precision(2), "40.71° N, 74.01° W");
    }

    #[test]
    fn geo_point_label_and_map_url() {
        let paris = GeoPoint::labeled("Paris", 48.8566, 2.3522);
        assert_eq!(paris.label(), Some("Paris"));
        assert!(paris.map_url().contains("48.8566"));
        assert!(paris.map_url().contains("2.3522"));
        assert!(GeoPoint::new(0.0, 0.0).label().is_none());
    }
}
