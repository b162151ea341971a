//! Tilecrop - physical-coordinate image tiling
//!
//! This library slices a raster image into a regular grid of tiles and
//! derives, for each tile, its real-world offset from the image centre
//! given the physical dimensions the full image represents. Each tile
//! gets a name encoding its index and offset, an encoded raster crop,
//! and a spatial anchor placeholder for downstream content placement.

pub mod anchor;
pub mod grid;
pub mod job;
pub mod naming;
pub mod raster;
pub mod telemetry;

pub use anchor::{Anchor, AnchorConfig};
pub use grid::{
    compute_tiles, GridSpec, ImageDescriptor, PhysicalExtent, PhysicalOffset, PixelRect, Tile,
    TilePlan,
};
pub use job::{validate, JobError, Manifest, SliceJob, SliceOutcome, SliceRequest, ValidationError};
pub use naming::{encode_tile_name, extract_offset, MalformedName};
pub use raster::{PngTileCropper, RasterError, TileCropper};
