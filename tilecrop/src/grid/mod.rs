//! Tile grid partitioning and pixel-to-physical coordinate mapping.
//!
//! Given the source raster's pixel dimensions, a column/row division
//! factor, and the physical width/height the image represents, this
//! module computes the pixel rectangle of every tile in row-major order
//! together with the physical-space offset of each tile's centre from
//! the image's overall physical centre.
//!
//! The physical origin sits at the image centre. Offsets decrease as the
//! tile index increases along each axis: the first tile of a row has the
//! largest positive `dx`.

mod types;

pub use types::{GridSpec, ImageDescriptor, PhysicalExtent, PhysicalOffset, PixelRect, Tile};

use crate::naming::encode_tile_name;

/// A tiling of one source image, ready to be iterated in row-major order.
///
/// A plan is a pure value: constructing one performs no work beyond
/// storing the inputs, and every [`Tile`] is computed on demand.
///
/// # Example
///
/// ```
/// use tilecrop::grid::{GridSpec, ImageDescriptor, PhysicalExtent, TilePlan};
///
/// let plan = TilePlan::new(
///     "img",
///     ImageDescriptor::new(100, 100),
///     GridSpec::new(2, 2),
///     PhysicalExtent::new(2.0, 2.0),
/// );
///
/// let tiles = plan.compute();
/// assert_eq!(tiles.len(), 4);
/// assert_eq!(tiles[0].offset.dx, 0.5);
/// assert_eq!(tiles[0].name, "imgCrop0X0.5Y0.5");
/// ```
#[derive(Debug, Clone)]
pub struct TilePlan<'a> {
    base_name: &'a str,
    image: ImageDescriptor,
    grid: GridSpec,
    extent: PhysicalExtent,
}

impl<'a> TilePlan<'a> {
    /// Create a new tile plan.
    ///
    /// Inputs are assumed validated (see [`crate::job::validate`]); a
    /// grid factor of zero would divide by zero.
    pub fn new(
        base_name: &'a str,
        image: ImageDescriptor,
        grid: GridSpec,
        extent: PhysicalExtent,
    ) -> Self {
        debug_assert!(grid.columns > 0 && grid.rows > 0);
        Self {
            base_name,
            image,
            grid,
            extent,
        }
    }

    /// Per-tile pixel dimensions, from integer division.
    ///
    /// When the grid factors do not evenly divide the image, the
    /// remainder pixels on the right and bottom edges are dropped.
    pub fn crop_size(&self) -> (u32, u32) {
        (
            self.image.width / self.grid.columns,
            self.image.height / self.grid.rows,
        )
    }

    /// Per-tile physical dimensions, from real division (no truncation).
    pub fn real_crop_size(&self) -> (f32, f32) {
        (
            self.extent.width / self.grid.columns as f32,
            self.extent.height / self.grid.rows as f32,
        )
    }

    /// Total number of tiles the plan produces.
    pub fn tile_count(&self) -> u32 {
        self.grid.tile_count()
    }

    /// Compute the tile at the given grid position.
    pub fn tile(&self, row: u32, col: u32) -> Tile {
        let (crop_width, crop_height) = self.crop_size();
        let (real_crop_width, real_crop_height) = self.real_crop_size();

        // Physical centre of the whole image
        let pivot_x = self.extent.width / 2.0;
        let pivot_y = self.extent.height / 2.0;

        let dx = pivot_x - (real_crop_width / 2.0 + real_crop_width * col as f32);
        let dy = pivot_y - (real_crop_height / 2.0 + real_crop_height * row as f32);

        let index = row * self.grid.columns + col;
        let offset = PhysicalOffset::new(dx, dy);

        Tile {
            index,
            row,
            col,
            rect: PixelRect::new(crop_width * col, crop_height * row, crop_width, crop_height),
            offset,
            name: encode_tile_name(self.base_name, index, dx, dy),
        }
    }

    /// Iterate over all tiles in row-major order.
    pub fn iter(&self) -> TileIter<'_, 'a> {
        TileIter {
            plan: self,
            next_index: 0,
        }
    }

    /// Compute all tiles in row-major order.
    pub fn compute(&self) -> Vec<Tile> {
        self.iter().collect()
    }
}

/// Row-major iterator over the tiles of a [`TilePlan`].
#[derive(Debug)]
pub struct TileIter<'p, 'a> {
    plan: &'p TilePlan<'a>,
    next_index: u32,
}

impl Iterator for TileIter<'_, '_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.next_index >= self.plan.tile_count() {
            return None;
        }
        let row = self.next_index / self.plan.grid.columns;
        let col = self.next_index % self.plan.grid.columns;
        self.next_index += 1;
        Some(self.plan.tile(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.plan.tile_count() - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileIter<'_, '_> {}

/// Compute all tiles for the given inputs in row-major order.
///
/// Convenience wrapper around [`TilePlan::compute`].
pub fn compute_tiles(
    base_name: &str,
    image: ImageDescriptor,
    grid: GridSpec,
    extent: PhysicalExtent,
) -> Vec<Tile> {
    TilePlan::new(base_name, image, grid, extent).compute()
}
