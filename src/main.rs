// SPDX-License-Identifier: MPL-2.0
use exif_lens::application::catalog::{read_warning, TagCatalog};
use exif_lens::application::geo;
use exif_lens::application::port::MetadataContainer;
use exif_lens::application::staging::EditStaging;
use exif_lens::config::{self, Config};
use exif_lens::error::{Error, Result};
use exif_lens::media::ExifContainer;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
exif_lens - inspect EXIF tags, stage edits and show GPS positions

USAGE:
  exif_lens [OPTIONS] [IMAGE]

OPTIONS:
  --config PATH      Read settings from PATH instead of the user config dir
  --show TAG         Display a single tag value
  --set TAG=VALUE    Stage an edit (repeatable); the image is never modified
  --gazetteer        Print the travel-map locations
  -h, --help         Print this help

Set RUST_LOG=debug for diagnostic output.
";

struct Args {
    config: Option<PathBuf>,
    show: Option<String>,
    edits: Vec<(String, String)>,
    gazetteer: bool,
    image: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(tag, value)| (tag.trim().to_string(), value.to_string()))
        .filter(|(tag, _)| !tag.is_empty())
        .ok_or_else(|| format!("expected TAG=VALUE, got '{s}'"))
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        show: args.opt_value_from_str("--show")?,
        edits: args.values_from_fn("--set", parse_assignment)?,
        gazetteer: args.contains("--gazetteer"),
        image: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!("unexpected arguments: {remaining:?}")));
    }
    Ok(Some(parsed))
}

fn print_gazetteer(precision: usize) {
    println!("Travel map:");
    for (i, point) in geo::static_gazetteer().iter().enumerate() {
        println!(
            "  {:>2}. {:<12} {}",
            i + 1,
            point.label().unwrap_or_default(),
            point.format_with_precision(precision)
        );
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let precision = config.coordinate_precision();

    if args.gazetteer {
        print_gazetteer(precision);
    }

    let Some(image) = args.image.or_else(|| config.default_image.clone()) else {
        if args.gazetteer {
            return Ok(());
        }
        return Err(Error::Usage(
            "no image given and no default_image configured".to_string(),
        ));
    };

    let container = ExifContainer::open(&image)?;
    println!("Image: {}", image.display());

    if !container.has_exif() {
        println!("This image has no EXIF metadata.");
        return Ok(());
    }

    let catalog = TagCatalog::new(&container);

    if let Some(tag) = &args.show {
        match catalog.describe_tag(tag) {
            Ok(line) => println!("{line}"),
            Err(e) => println!("warning: {}", read_warning(&e)),
        }
    }

    print_tags(&catalog, &config);
    stage_edits(&catalog, args.edits)?;

    if container.has_geodata() {
        match geo::extract_position(&container) {
            Ok(point) => {
                println!("Position: {}", point.format_with_precision(precision));
                println!("Map: {}", point.map_url());
            }
            Err(e) => println!("warning: {e}"),
        }
    }

    Ok(())
}

fn print_tags(catalog: &TagCatalog<'_, ExifContainer>, config: &Config) {
    let entries = catalog.entries();
    if !entries.iter().any(|entry| entry.readable) {
        println!("No modifiable tags detected.");
    }

    println!("Tags:");
    for entry in entries {
        match entry.current_value {
            Some(value) => println!("  {} = {}", entry.name, value),
            None if config.show_unreadable_tags() => println!("  {} (unreadable)", entry.name),
            None => {}
        }
    }
}

fn stage_edits(
    catalog: &TagCatalog<'_, ExifContainer>,
    edits: Vec<(String, String)>,
) -> Result<()> {
    if edits.is_empty() {
        return Ok(());
    }

    let mut staging = EditStaging::new();
    let applied = staging.submit_batch(catalog, edits);
    println!("{applied} edit(s) staged");
    if !staging.is_empty() {
        print!("{}", staging.to_toml()?);
    }
    println!("Changes are staged only; the image file is not modified.");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "exif_lens failed");
            ExitCode::FAILURE
        }
    }
}
