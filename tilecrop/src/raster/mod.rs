//! Raster cropping abstractions.
//!
//! The [`TileCropper`] trait decouples the tiling math from any specific
//! raster backend: the grid layer hands a pixel rectangle to a cropper
//! and receives encoded image bytes back. The default implementation,
//! [`PngTileCropper`], crops an in-memory image and encodes PNG.
//!
//! # Example
//!
//! ```
//! use image::DynamicImage;
//! use tilecrop::grid::PixelRect;
//! use tilecrop::raster::{PngTileCropper, TileCropper};
//!
//! let source = DynamicImage::new_rgba8(100, 100);
//! let cropper = PngTileCropper::new(source);
//! let bytes = cropper.crop(&PixelRect::new(0, 0, 50, 50)).unwrap();
//! assert!(!bytes.is_empty());
//! assert_eq!(cropper.extension(), "png");
//! ```

mod error;

pub use error::RasterError;

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::grid::{ImageDescriptor, PixelRect};

/// Trait for cropping a source raster into encoded tile images.
///
/// Implementations must be thread-safe (`Send + Sync`) so tiles can be
/// cropped and encoded in parallel.
pub trait TileCropper: Send + Sync {
    /// Crop the given rectangle and return it as encoded image bytes.
    ///
    /// # Errors
    ///
    /// Returns `RasterError` if the rectangle is empty, falls outside
    /// the source image, or encoding fails.
    fn crop(&self, rect: &PixelRect) -> Result<Vec<u8>, RasterError>;

    /// File extension of the encoded output, without the dot.
    fn extension(&self) -> &'static str;

    /// Pixel dimensions of the source image.
    fn descriptor(&self) -> ImageDescriptor;
}

/// Crops an in-memory image and encodes each tile as PNG.
#[derive(Debug, Clone)]
pub struct PngTileCropper {
    source: DynamicImage,
}

impl PngTileCropper {
    /// Create a cropper over a loaded source image.
    pub fn new(source: DynamicImage) -> Self {
        Self { source }
    }
}

impl TileCropper for PngTileCropper {
    fn crop(&self, rect: &PixelRect) -> Result<Vec<u8>, RasterError> {
        if rect.width == 0 || rect.height == 0 {
            return Err(RasterError::EmptyRect(*rect));
        }
        if rect.right() > self.source.width() || rect.bottom() > self.source.height() {
            return Err(RasterError::RectOutOfBounds {
                rect: *rect,
                width: self.source.width(),
                height: self.source.height(),
            });
        }

        let view = self.source.crop_imm(rect.x, rect.y, rect.width, rect.height);
        let mut buffer = Cursor::new(Vec::new());
        view.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| RasterError::EncodingFailed(e.to_string()))?;
        Ok(buffer.into_inner())
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor::new(self.source.width(), self.source.height())
    }
}
