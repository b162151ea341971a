//! Value types for the tile grid.
//!
//! All types here are pure, immutable values computed on demand; nothing
//! is persisted beyond what the caller chooses to emit.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of the source raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
}

impl ImageDescriptor {
    /// Create a new image descriptor.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Real-world dimensions the full image represents.
///
/// Both values share the same physical unit (typically metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalExtent {
    /// Physical width of the imaged object.
    pub width: f32,
    /// Physical height of the imaged object.
    pub height: f32,
}

impl PhysicalExtent {
    /// Create a new physical extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Column and row division factors for the tile grid.
///
/// The factors need not evenly divide the image dimensions: the per-tile
/// pixel size is computed with integer division and any remainder row or
/// column of pixels is silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns the image is divided into.
    pub columns: u32,
    /// Number of rows the image is divided into.
    pub rows: u32,
}

impl GridSpec {
    /// Create a new grid spec.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of tiles the grid produces.
    pub fn tile_count(&self) -> u32 {
        self.columns * self.rows
    }
}

/// Axis-aligned pixel rectangle within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Rectangle width in pixels.
    pub width: u32,
    /// Rectangle height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Create a new pixel rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Offset of a tile centre from the whole image's physical centre.
///
/// The origin sits at the image centre and offsets decrease as the tile
/// index increases along each axis, so the first tile of a row carries
/// the largest positive `dx`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalOffset {
    /// Horizontal distance from the image centre.
    pub dx: f32,
    /// Vertical distance from the image centre.
    pub dy: f32,
}

impl PhysicalOffset {
    /// Create a new physical offset.
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A single tile of the sliced image.
///
/// Tiles are emitted in row-major order: the tile at flat index `i` sits
/// at `row = i / columns`, `col = i % columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Flat emission index, starting at zero.
    pub index: u32,
    /// Row index (0-based, top row first).
    pub row: u32,
    /// Column index (0-based, leftmost column first).
    pub col: u32,
    /// Pixel rectangle of this tile within the source image.
    pub rect: PixelRect,
    /// Physical offset of the tile centre from the image centre.
    pub offset: PhysicalOffset,
    /// Generated name encoding index and offset.
    pub name: String,
}
