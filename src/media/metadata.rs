// SPDX-License-Identifier: MPL-2.0
//! EXIF metadata decoding backed by `kamadak-exif`.
//!
//! This module adapts a decoded [`exif::Exif`] into a [`MetadataContainer`]:
//! primary-image fields become snake_case tag identifiers (`GPSLatitude` ->
//! `gps_latitude`) mapped to [`TagValue`]s. Fields the adapter cannot turn
//! into a value (maker notes, opaque `UNDEFINED` payloads, rationals with a
//! zero denominator) stay declared but fail to read.

use crate::application::port::{MetadataContainer, MetadataDecoder, MetadataError};
use crate::domain::error::ReadError;
use crate::domain::metadata::TagValue;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::{debug, warn};

type Probe = std::result::Result<TagValue, ReadError>;

/// Metadata decoded from an image's EXIF segment.
#[derive(Debug, Clone, Default)]
pub struct ExifContainer {
    fields: IndexMap<String, Probe>,
    has_exif: bool,
}

impl ExifContainer {
    /// A container for an image without EXIF data.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a container from already-parsed EXIF data.
    ///
    /// Only primary-image fields are kept; the first field with a given name wins.
    #[must_use]
    pub fn from_exif(exif: &exif::Exif) -> Self {
        let mut fields = IndexMap::new();

        for field in exif.fields().filter(|f| f.ifd_num == exif::In::PRIMARY) {
            if is_ifd_pointer(field.tag) {
                continue;
            }
            let name = tag_name(field.tag);
            if fields.contains_key(&name) {
                continue;
            }
            let value = convert_value(&field.value).map_err(|reason| {
                debug!(tag = %name, %reason, "field is not decodable");
                ReadError::undecodable(name.clone(), reason)
            });
            fields.insert(name, value);
        }

        Self {
            fields,
            has_exif: true,
        }
    }

    /// Decodes EXIF data from an image container (JPEG, TIFF, PNG, WebP, HEIF).
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the image or its EXIF structure is invalid.
    /// An image without EXIF yields [`ExifContainer::empty`].
    pub fn from_image_bytes(bytes: &[u8]) -> std::result::Result<Self, MetadataError> {
        Self::from_reader(&mut Cursor::new(bytes))
    }

    /// Decodes raw TIFF-structured EXIF data (the payload of a JPEG APP1 segment
    /// after its `Exif\0\0` header).
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the TIFF structure is invalid.
    pub fn from_raw(data: Vec<u8>) -> std::result::Result<Self, MetadataError> {
        let exif = salvage(lenient_reader().read_raw(data))?;
        Ok(Self::from_exif(&exif))
    }

    /// Reads and decodes an image file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its metadata is invalid.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Io(format!("cannot open {}: {e}", path.display())))?;
        let mut reader = BufReader::new(file);

        let container = Self::from_reader(&mut reader)?;
        debug!(
            path = %path.display(),
            tags = container.fields.len(),
            has_exif = container.has_exif,
            "image metadata decoded"
        );
        Ok(container)
    }

    fn from_reader<R: BufRead + Seek>(reader: &mut R) -> std::result::Result<Self, MetadataError> {
        match salvage(lenient_reader().read_from_container(reader)) {
            Ok(exif) => Ok(Self::from_exif(&exif)),
            Err(exif::Error::NotFound(_)) => Ok(Self::empty()),
            Err(e) => Err(e.into()),
        }
    }
}

impl MetadataContainer for ExifContainer {
    fn list_all(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn try_get(&self, tag: &str) -> Probe {
        self.fields
            .get(tag)
            .cloned()
            .unwrap_or_else(|| Err(ReadError::NotDeclared(tag.to_string())))
    }

    fn has_exif(&self) -> bool {
        self.has_exif
    }
}

/// Decoder producing [`ExifContainer`]s from image bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl MetadataDecoder for ExifDecoder {
    type Container = ExifContainer;

    fn decode(&self, bytes: &[u8]) -> std::result::Result<ExifContainer, MetadataError> {
        ExifContainer::from_image_bytes(bytes)
    }
}

impl From<exif::Error> for MetadataError {
    fn from(err: exif::Error) -> Self {
        match err {
            exif::Error::Io(e) => MetadataError::IoError(e.to_string()),
            exif::Error::InvalidFormat(msg) => MetadataError::CorruptedMetadata(msg.to_string()),
            exif::Error::NotSupported(_) => MetadataError::UnsupportedFormat,
            other => MetadataError::ReadFailed(other.to_string()),
        }
    }
}

/// A reader that skips corrupt fields instead of rejecting the whole image.
fn lenient_reader() -> exif::Reader {
    let mut reader = exif::Reader::new();
    reader.continue_on_error(true);
    reader
}

/// Keeps the fields decoded before and after corrupt ones.
///
/// The dropped fields cannot be named: kamadak-exif only reports why they
/// failed.
fn salvage(
    result: std::result::Result<exif::Exif, exif::Error>,
) -> std::result::Result<exif::Exif, exif::Error> {
    result.or_else(|e| {
        e.distill_partial_result(|errors| {
            for error in &errors {
                warn!(%error, "skipped corrupt EXIF field");
            }
        })
    })
}

/// Structural IFD links, not user-facing tags.
fn is_ifd_pointer(tag: exif::Tag) -> bool {
    tag == exif::Tag::ExifIFDPointer
        || tag == exif::Tag::GPSInfoIFDPointer
        || tag == exif::Tag::InteropIFDPointer
}

/// Canonical identifier of an EXIF tag.
///
/// Known tags use the snake_case form of their EXIF name; unknown ones are
/// named after their number (`tag_0xc4a5`).
fn tag_name(tag: exif::Tag) -> String {
    if tag.description().is_none() {
        return format!("tag_{:#06x}", tag.number());
    }
    snake_case(&tag.to_string())
}

/// Converts an EXIF CamelCase name, keeping acronyms together
/// (`GPSLatitudeRef` -> `gps_latitude_ref`, `YCbCrPositioning` -> `y_cb_cr_positioning`).
fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        let boundary = prev.is_some_and(|p| {
            p.is_ascii_lowercase()
                || p.is_ascii_digit()
                || (p.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()))
        });
        if boundary {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

fn convert_value(value: &exif::Value) -> std::result::Result<TagValue, String> {
    use exif::Value;

    match value {
        Value::Ascii(parts) => Ok(TagValue::Text(
            parts
                .iter()
                .map(|part| String::from_utf8_lossy(part).into_owned())
                .collect::<Vec<_>>()
                .join(", "),
        )),
        Value::Byte(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::Short(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::Long(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::SByte(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::SShort(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::SLong(v) => integers(v.iter().map(|&x| i64::from(x))),
        Value::Rational(v) => floats(v.iter().map(|r| (r.denom != 0).then(|| r.to_f64()))),
        Value::SRational(v) => floats(v.iter().map(|r| (r.denom != 0).then(|| r.to_f64()))),
        Value::Float(v) => floats(v.iter().map(|&x| Some(f64::from(x)))),
        Value::Double(v) => floats(v.iter().map(|&x| Some(x))),
        Value::Undefined(bytes, _) => Err(format!("opaque {}-byte payload", bytes.len())),
        Value::Unknown(typ, count, _) => Err(format!(
            "unknown value type {typ} with {count} components"
        )),
        #[allow(unreachable_patterns)]
        _ => Err("unsupported value type".to_string()),
    }
}

fn integers(values: impl Iterator<Item = i64>) -> std::result::Result<TagValue, String> {
    let values: Vec<i64> = values.collect();
    match values.as_slice() {
        [] => Err("empty value".to_string()),
        [single] => Ok(TagValue::Integer(*single)),
        _ => Ok(TagValue::Floats(values.iter().map(|&v| v as f64).collect())),
    }
}

fn floats(values: impl Iterator<Item = Option<f64>>) -> std::result::Result<TagValue, String> {
    let values: Vec<f64> = values
        .collect::<Option<_>>()
        .ok_or_else(|| "zero denominator".to_string())?;
    match values.as_slice() {
        [] => Err("empty value".to_string()),
        [single] => Ok(TagValue::Float(*single)),
        _ => Ok(TagValue::Floats(values)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::TagCatalog;
    use crate::application::geo::extract_position;
    use crate::test_utils::{assert_abs_diff_eq, COORDINATE_EPSILON};
    use exif::experimental::Writer;
    use exif::{Field, In, Rational, Tag, Value};

    fn field(tag: Tag, value: Value) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value,
        }
    }

    fn ascii(text: &str) -> Value {
        Value::Ascii(vec![text.as_bytes().to_vec()])
    }

    fn dms(degrees: u32, minutes: u32, seconds: u32) -> Value {
        Value::Rational(vec![
            Rational { num: degrees, denom: 1 },
            Rational { num: minutes, denom: 1 },
            Rational { num: seconds, denom: 1 },
        ])
    }

    fn write_tiff(fields: &[Field]) -> Vec<u8> {
        let mut writer = Writer::new();
        for f in fields {
            writer.push_field(f);
        }
        let mut buf = Cursor::new(Vec::new());
        writer.write(&mut buf, false).expect("write exif");
        buf.into_inner()
    }

    fn sample_fields() -> Vec<Field> {
        vec![
            field(Tag::Artist, ascii("Alice")),
            field(Tag::Orientation, Value::Short(vec![1])),
            field(Tag::XResolution, Value::Rational(vec![Rational { num: 72, denom: 1 }])),
            field(Tag::MakerNote, Value::Undefined(vec![1, 2, 3, 4], 0)),
            field(Tag::GPSLatitudeRef, ascii("N")),
            field(Tag::GPSLatitude, dms(48, 51, 24)),
            field(Tag::GPSLongitudeRef, ascii("E")),
            field(Tag::GPSLongitude, dms(2, 21, 3)),
        ]
    }

    #[test]
    fn snake_case_keeps_acronyms_together() {
        assert_eq!(snake_case("Artist"), "artist");
        assert_eq!(snake_case("GPSLatitude"), "gps_latitude");
        assert_eq!(snake_case("GPSLongitudeRef"), "gps_longitude_ref");
        assert_eq!(snake_case("FNumber"), "f_number");
        assert_eq!(snake_case("PixelXDimension"), "pixel_x_dimension");
        assert_eq!(snake_case("YCbCrPositioning"), "y_cb_cr_positioning");
        assert_eq!(snake_case("DateTimeOriginal"), "date_time_original");
    }

    #[test]
    fn tag_name_for_known_tags() {
        assert_eq!(tag_name(Tag::GPSLatitude), "gps_latitude");
        assert_eq!(tag_name(Tag::MakerNote), "maker_note");
    }

    #[test]
    fn convert_value_mapping() {
        assert_eq!(convert_value(&ascii("Canon")), Ok(TagValue::from("Canon")));
        assert_eq!(convert_value(&Value::Short(vec![6])), Ok(TagValue::Integer(6)));
        assert_eq!(
            convert_value(&Value::Byte(vec![2, 3, 0, 0])),
            Ok(TagValue::from([2.0, 3.0, 0.0, 0.0]))
        );
        assert_eq!(
            convert_value(&Value::SRational(vec![exif::SRational { num: -1, denom: 2 }])),
            Ok(TagValue::Float(-0.5))
        );
        assert_eq!(convert_value(&dms(48, 51, 24)), Ok(TagValue::from([48.0, 51.0, 24.0])));
    }

    #[test]
    fn convert_value_rejects_undecodable_payloads() {
        assert!(convert_value(&Value::Undefined(vec![0; 8], 0)).is_err());
        assert!(convert_value(&Value::Rational(vec![Rational { num: 1, denom: 0 }])).is_err());
        assert!(convert_value(&Value::Short(Vec::new())).is_err());
    }

    #[test]
    fn from_raw_catalogs_primary_fields() {
        let container = ExifContainer::from_raw(write_tiff(&sample_fields())).expect("decode");
        let tags = container.list_all();

        for expected in [
            "artist",
            "orientation",
            "x_resolution",
            "maker_note",
            "gps_latitude_ref",
            "gps_latitude",
            "gps_longitude_ref",
            "gps_longitude",
        ] {
            assert!(tags.iter().any(|t| t == expected), "missing {expected}");
        }
        assert!(!tags.iter().any(|t| t.ends_with("pointer")));
        assert!(container.has_exif());
        assert!(container.has_geodata());
    }

    #[test]
    fn from_raw_values() {
        let container = ExifContainer::from_raw(write_tiff(&sample_fields())).expect("decode");

        assert_eq!(container.try_get("artist"), Ok(TagValue::from("Alice")));
        assert_eq!(container.try_get("orientation"), Ok(TagValue::Integer(1)));
        assert_eq!(container.try_get("x_resolution"), Ok(TagValue::Float(72.0)));
        assert!(matches!(
            container.try_get("maker_note"),
            Err(ReadError::Undecodable { .. })
        ));
    }

    #[test]
    fn maker_note_is_not_modifiable() {
        let container = ExifContainer::from_raw(write_tiff(&sample_fields())).expect("decode");
        let modifiable = TagCatalog::new(&container).modifiable_tags();
        assert!(modifiable.iter().any(|t| t == "artist"));
        assert!(!modifiable.iter().any(|t| t == "maker_note"));
    }

    #[test]
    fn position_from_decoded_gps() {
        let container = ExifContainer::from_raw(write_tiff(&sample_fields())).expect("decode");
        let point = extract_position(&container).expect("position");
        assert_abs_diff_eq!(point.latitude(), 48.8567, epsilon = COORDINATE_EPSILON);
        assert_abs_diff_eq!(point.longitude(), 2.3508, epsilon = COORDINATE_EPSILON);
    }

    #[test]
    fn enumeration_order_is_stable() {
        let tiff = write_tiff(&sample_fields());
        let a = ExifContainer::from_raw(tiff.clone()).expect("decode");
        let b = ExifContainer::from_raw(tiff).expect("decode");
        assert_eq!(a.list_all(), b.list_all());
    }

    #[test]
    fn jpeg_without_exif_is_empty() {
        let container = ExifDecoder.decode(&[0xFF, 0xD8, 0xFF, 0xD9]).expect("decode");
        assert!(!container.has_exif());
        assert!(container.list_all().is_empty());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(ExifDecoder.decode(b"not an image").is_err());
        assert!(ExifContainer::from_raw(b"not a tiff".to_vec()).is_err());
    }

    /// Little-endian TIFF with `Make = "Canon"` and an `Artist` whose value
    /// offset points past the end of the buffer.
    fn tiff_with_truncated_artist() -> Vec<u8> {
        let mut tiff = b"II*\0".to_vec();
        tiff.extend_from_slice(&8u32.to_le_bytes());
        tiff.extend_from_slice(&2u16.to_le_bytes());
        for (tag, count, offset) in [(0x010Fu16, 6u32, 38u32), (0x013B, 15, 0x00FF_FF00)] {
            tiff.extend_from_slice(&tag.to_le_bytes());
            tiff.extend_from_slice(&2u16.to_le_bytes());
            tiff.extend_from_slice(&count.to_le_bytes());
            tiff.extend_from_slice(&offset.to_le_bytes());
        }
        tiff.extend_from_slice(&0u32.to_le_bytes());
        tiff.extend_from_slice(b"Canon\0");
        tiff
    }

    #[test]
    fn corrupt_field_does_not_discard_the_rest() {
        let container = ExifContainer::from_raw(tiff_with_truncated_artist()).expect("decode");
        assert!(container.has_exif());
        assert_eq!(container.list_all(), vec!["make"]);
        assert_eq!(container.try_get("make"), Ok(TagValue::from("Canon")));
    }

    #[test]
    fn open_handles_missing_file() {
        let result = ExifContainer::open("/nonexistent/path/image.jpg");
        match result {
            Err(Error::Io(message)) => assert!(message.contains("/nonexistent/path/image.jpg")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
