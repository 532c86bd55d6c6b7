// SPDX-License-Identifier: MPL-2.0
use exif_lens::application::catalog::TagCatalog;
use exif_lens::application::geo::{dms_to_decimal, extract_position, static_gazetteer};
use exif_lens::application::staging::EditStaging;
use exif_lens::config::{self, Config};
use exif_lens::domain::error::GeoError;
use exif_lens::domain::metadata::Hemisphere;
use exif_lens::media::MemoryContainer;
use std::collections::BTreeMap;
use tempfile::tempdir;

#[test]
fn catalog_and_staging_scenario() {
    let container = MemoryContainer::new()
        .with_tag("artist", "Alice")
        .with_unreadable("gps_latitude", "malformed rational");
    let catalog = TagCatalog::new(&container);

    assert_eq!(catalog.modifiable_tags(), vec!["artist"]);

    let mut staging = EditStaging::new();
    let applied = staging.submit_batch(&catalog, [("artist", "Bob"), ("gps_latitude", "ignored")]);

    assert_eq!(applied, 1);
    let expected: BTreeMap<String, String> =
        [("artist".to_string(), "Bob".to_string())].into_iter().collect();
    assert_eq!(staging.get_staged(), &expected);
}

#[test]
fn staging_never_alters_the_container() {
    let container = MemoryContainer::new().with_tag("artist", "Alice");
    let catalog = TagCatalog::new(&container);
    let mut staging = EditStaging::new();

    staging.submit_batch(&catalog, [("artist", "Bob")]);

    assert_eq!(catalog.describe_tag("artist").unwrap(), "artist : Alice");
    assert_eq!(catalog.form_defaults(), vec![("artist".to_string(), "Alice".to_string())]);
}

#[test]
fn resubmitting_the_rendered_form_is_a_noop() {
    let container = MemoryContainer::new()
        .with_tag("make", "Canon")
        .with_tag("x_resolution", 72.0)
        .with_tag("gps_latitude", [48.0, 51.0, 24.0]);
    let catalog = TagCatalog::new(&container);
    let mut staging = EditStaging::new();

    let applied = staging.submit_batch(&catalog, catalog.form_defaults());

    assert_eq!(applied, 0);
    assert!(staging.is_empty());
}

#[test]
fn dms_reference_values() {
    assert!((dms_to_decimal(48.0, 51.0, 24.0, Hemisphere::North) - 48.8567).abs() < 1e-4);
    assert!((dms_to_decimal(2.0, 21.0, 3.0, Hemisphere::East) - 2.3508).abs() < 1e-4);
    assert_eq!(dms_to_decimal(40.0, 0.0, 0.0, Hemisphere::South), -40.0);
    assert_eq!(dms_to_decimal(73.0, 30.0, 0.0, Hemisphere::West), -73.5);
}

#[test]
fn gps_failures_are_typed() {
    let plain_float = MemoryContainer::new()
        .with_tag("gps_latitude", 48.85)
        .with_tag("gps_latitude_ref", "N")
        .with_tag("gps_longitude", [2.0, 21.0, 3.0])
        .with_tag("gps_longitude_ref", "E");
    assert!(matches!(
        extract_position(&plain_float),
        Err(GeoError::MalformedCoordinate(tag, _)) if tag == "gps_latitude"
    ));

    let no_longitude_ref = MemoryContainer::new()
        .with_tag("gps_latitude", [48.0, 51.0, 24.0])
        .with_tag("gps_latitude_ref", "N")
        .with_tag("gps_longitude", [2.0, 21.0, 3.0]);
    assert_eq!(
        extract_position(&no_longitude_ref),
        Err(GeoError::MissingTag("gps_longitude_ref".to_string()))
    );
}

#[test]
fn gazetteer_points_are_in_range() {
    let points = static_gazetteer();
    assert_eq!(points.len(), 10);
    assert!(points.iter().all(|p| p.is_in_range()));
}

#[test]
fn config_selects_default_image() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial = Config {
        default_image: Some("paysage.jpg".into()),
        ..Config::default()
    };
    config::save_to_path(&initial, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(
        loaded.default_image.as_deref(),
        Some(std::path::Path::new("paysage.jpg"))
    );

    dir.close().expect("Failed to close temporary directory");
}
