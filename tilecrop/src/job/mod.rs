//! Slice job validation and orchestration.
//!
//! A [`SliceJob`] ties the pure tiling math to the output side: it
//! validates a [`SliceRequest`], computes the tile grid, crops every
//! tile through a [`TileCropper`], and writes one raster file plus one
//! anchor file per tile into a per-image output directory, followed by
//! a row-major manifest.
//!
//! Tile cropping and encoding runs in parallel across tiles (no tile
//! depends on another); all aggregate output stays in row-major order
//! so results are deterministic regardless of scheduling.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::anchor::{Anchor, AnchorConfig};
use crate::grid::{GridSpec, ImageDescriptor, PhysicalExtent, Tile, TilePlan};
use crate::raster::{RasterError, TileCropper};

/// A request to slice one image into a tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRequest {
    /// Base name used for the output folder and every tile name.
    pub image_name: String,
    /// Pixel dimensions of the source image, if one was provided.
    pub image: Option<ImageDescriptor>,
    /// Column and row division factors.
    pub grid: GridSpec,
    /// Physical dimensions the full image represents.
    pub extent: PhysicalExtent,
}

impl SliceRequest {
    /// Create a request for a known image.
    pub fn new(
        image_name: impl Into<String>,
        image: ImageDescriptor,
        grid: GridSpec,
        extent: PhysicalExtent,
    ) -> Self {
        Self {
            image_name: image_name.into(),
            image: Some(image),
            grid,
            extent,
        }
    }
}

/// Errors reported by [`validate`], one per failed precondition.
///
/// Checks run in a fixed order and only the first failure is reported,
/// so callers always get a single actionable message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The image name is empty.
    #[error("image name must not be empty")]
    EmptyName,

    /// No source image was provided.
    #[error("no source image was provided")]
    MissingImage,

    /// The column division factor is zero.
    #[error("column division factor must be greater than zero")]
    ZeroColumns,

    /// The row division factor is zero.
    #[error("row division factor must be greater than zero")]
    ZeroRows,

    /// The physical width is not positive.
    #[error("physical width must be greater than zero, got {0}")]
    NonPositiveWidth(f32),

    /// The physical height is not positive.
    #[error("physical height must be greater than zero, got {0}")]
    NonPositiveHeight(f32),
}

/// Errors that can occur while running a slice job.
#[derive(Debug, Error)]
pub enum JobError {
    /// The request failed a precondition.
    #[error("invalid slice request: {0}")]
    Validation(#[from] ValidationError),

    /// Cropping or encoding a tile failed.
    #[error("failed to crop tile '{name}': {source}")]
    Crop { name: String, source: RasterError },

    /// Writing an output file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing an output file failed.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Validate a slice request.
///
/// Preconditions are checked in a fixed order (name, image, columns,
/// rows, physical width, physical height) and only the first failure
/// is reported.
pub fn validate(request: &SliceRequest) -> Result<(), ValidationError> {
    if request.image_name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if request.image.is_none() {
        return Err(ValidationError::MissingImage);
    }
    if request.grid.columns == 0 {
        return Err(ValidationError::ZeroColumns);
    }
    if request.grid.rows == 0 {
        return Err(ValidationError::ZeroRows);
    }
    if request.extent.width <= 0.0 {
        return Err(ValidationError::NonPositiveWidth(request.extent.width));
    }
    if request.extent.height <= 0.0 {
        return Err(ValidationError::NonPositiveHeight(request.extent.height));
    }
    Ok(())
}

/// Row-major manifest of one completed slice job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Base name of the sliced image.
    pub image_name: String,
    /// Division factors the job ran with.
    pub grid: GridSpec,
    /// Physical dimensions of the imaged object.
    pub extent: PhysicalExtent,
    /// All tiles in emission (row-major) order.
    pub tiles: Vec<Tile>,
}

/// Result of a completed slice job.
#[derive(Debug, Clone)]
pub struct SliceOutcome {
    /// Directory the outputs were written to.
    pub directory: PathBuf,
    /// All tiles in emission order.
    pub tiles: Vec<Tile>,
    /// Path of the written manifest.
    pub manifest_path: PathBuf,
}

/// Slices an image and writes per-tile raster and anchor outputs.
pub struct SliceJob {
    cropper: Box<dyn TileCropper>,
    anchors: AnchorConfig,
    output_root: PathBuf,
}

impl SliceJob {
    /// Create a job writing below the given output root.
    ///
    /// Outputs land in `<output_root>/<image_name>/`.
    pub fn new(
        cropper: Box<dyn TileCropper>,
        anchors: AnchorConfig,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cropper,
            anchors,
            output_root: output_root.into(),
        }
    }

    /// Validate the request, slice the image, and write all outputs.
    ///
    /// Per tile: `<name>.<ext>` with the cropped raster and
    /// `<name>.anchor.json` with the anchor placeholder. One
    /// `manifest.json` lists every tile in row-major order.
    pub fn run(&self, request: &SliceRequest) -> Result<SliceOutcome, JobError> {
        validate(request)?;
        let Some(image) = request.image else {
            return Err(ValidationError::MissingImage.into());
        };

        let plan = TilePlan::new(&request.image_name, image, request.grid, request.extent);
        let tiles = plan.compute();
        debug!(
            image_name = %request.image_name,
            columns = request.grid.columns,
            rows = request.grid.rows,
            "computed tile grid"
        );

        let directory = self.output_root.join(&request.image_name);
        fs::create_dir_all(&directory).map_err(|e| JobError::Io {
            path: directory.clone(),
            source: e,
        })?;

        // Crop in parallel; collect preserves row-major order
        let encoded: Vec<Result<Vec<u8>, RasterError>> = tiles
            .par_iter()
            .map(|tile| self.cropper.crop(&tile.rect))
            .collect();

        for (tile, result) in tiles.iter().zip(encoded) {
            let bytes = result.map_err(|source| JobError::Crop {
                name: tile.name.clone(),
                source,
            })?;

            let raster_path = directory.join(format!("{}.{}", tile.name, self.cropper.extension()));
            write_bytes(&raster_path, &bytes)?;

            let anchor = Anchor::for_tile(tile, &self.anchors);
            let anchor_path = directory.join(format!("{}.anchor.json", tile.name));
            write_json(&anchor_path, &anchor)?;

            debug!(name = %tile.name, index = tile.index, "tile written");
        }

        let manifest = Manifest {
            image_name: request.image_name.clone(),
            grid: request.grid,
            extent: request.extent,
            tiles: tiles.clone(),
        };
        let manifest_path = directory.join("manifest.json");
        write_json(&manifest_path, &manifest)?;

        info!(
            image_name = %request.image_name,
            tile_count = tiles.len(),
            directory = %directory.display(),
            "image sliced"
        );

        Ok(SliceOutcome {
            directory,
            tiles,
            manifest_path,
        })
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), JobError> {
    fs::write(path, bytes).map_err(|e| JobError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), JobError> {
    let json = serde_json::to_vec_pretty(value).map_err(|e| JobError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_bytes(path, &json)
}
