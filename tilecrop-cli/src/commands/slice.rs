//! The `slice` command: cut an image into a tile grid with anchors.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use indicatif::ProgressBar;
use tracing::debug;

use tilecrop::anchor::DEFAULT_DISTANCE_FROM_SOURCE;
use tilecrop::{
    telemetry, AnchorConfig, GridSpec, PhysicalExtent, PngTileCropper, SliceJob, SliceRequest,
    TileCropper,
};

use crate::error::CliError;

/// Arguments for `tilecrop slice`.
#[derive(Debug, Args)]
pub struct SliceArgs {
    /// Path to the source image
    pub image: PathBuf,

    /// Base name for the output folder and tile names (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Number of columns to divide the image into
    #[arg(long, short = 'c')]
    pub columns: u32,

    /// Number of rows to divide the image into
    #[arg(long, short = 'r')]
    pub rows: u32,

    /// Physical width of the imaged object (metres)
    #[arg(long)]
    pub width: f32,

    /// Physical height of the imaged object (metres)
    #[arg(long)]
    pub height: f32,

    /// Root directory for the output folder
    #[arg(long, default_value = "tiles")]
    pub out: PathBuf,

    /// Keep dy on the world Y axis instead of swapping Y and Z
    #[arg(long)]
    pub no_invert_yz: bool,

    /// Anchor distance from the imaged surface (metres)
    #[arg(long, default_value_t = DEFAULT_DISTANCE_FROM_SOURCE)]
    pub distance: f32,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Run the slice command.
pub fn run(args: SliceArgs) -> Result<(), CliError> {
    telemetry::init_logging(args.verbose);

    let source = image::open(&args.image)
        .map_err(|e| CliError::Image(format!("{}: {}", args.image.display(), e)))?;
    debug!(
        path = %args.image.display(),
        width = source.width(),
        height = source.height(),
        "image loaded"
    );

    let name = match args.name {
        Some(name) => name,
        None => base_name(&args.image).ok_or_else(|| {
            CliError::Image(format!(
                "cannot derive a base name from {}",
                args.image.display()
            ))
        })?,
    };

    let cropper = PngTileCropper::new(source);
    let request = SliceRequest::new(
        name.as_str(),
        cropper.descriptor(),
        GridSpec::new(args.columns, args.rows),
        PhysicalExtent::new(args.width, args.height),
    );
    let anchors = AnchorConfig::default()
        .with_invert_yz(!args.no_invert_yz)
        .with_distance_from_source(args.distance);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Slicing '{}' into {}x{} tiles...",
        name, args.columns, args.rows
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let job = SliceJob::new(Box::new(cropper), anchors, &args.out);
    let outcome = job.run(&request);
    spinner.finish_and_clear();

    let outcome = outcome?;
    println!(
        "Wrote {} tiles to {}",
        outcome.tiles.len(),
        outcome.directory.display()
    );
    Ok(())
}

/// Derive the base name from the image path's file stem.
fn base_name(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_from_path() {
        assert_eq!(base_name(Path::new("photos/mural.png")), Some("mural".to_string()));
        assert_eq!(base_name(Path::new("mural")), Some("mural".to_string()));
        assert_eq!(base_name(Path::new("/")), None);
    }
}
