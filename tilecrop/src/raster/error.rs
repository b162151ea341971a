//! Error types for raster cropping operations.

use std::fmt;

use crate::grid::PixelRect;

/// Errors that can occur while cropping and encoding a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Requested rectangle extends past the source image.
    RectOutOfBounds {
        rect: PixelRect,
        width: u32,
        height: u32,
    },
    /// Requested rectangle has a zero dimension.
    EmptyRect(PixelRect),
    /// Encoding the cropped pixels failed.
    EncodingFailed(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::RectOutOfBounds {
                rect,
                width,
                height,
            } => {
                write!(
                    f,
                    "Rectangle ({}, {}) {}×{} exceeds source image {}×{}",
                    rect.x, rect.y, rect.width, rect.height, width, height
                )
            }
            RasterError::EmptyRect(rect) => {
                write!(f, "Rectangle {}×{} has no pixels", rect.width, rect.height)
            }
            RasterError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_error_display_out_of_bounds() {
        let err = RasterError::RectOutOfBounds {
            rect: PixelRect::new(50, 50, 100, 100),
            width: 100,
            height: 100,
        };
        assert_eq!(
            err.to_string(),
            "Rectangle (50, 50) 100×100 exceeds source image 100×100"
        );
    }

    #[test]
    fn test_raster_error_display_empty_rect() {
        let err = RasterError::EmptyRect(PixelRect::new(0, 0, 0, 50));
        assert_eq!(err.to_string(), "Rectangle 0×50 has no pixels");
    }

    #[test]
    fn test_raster_error_display_encoding_failed() {
        let err = RasterError::EncodingFailed("png writer error".to_string());
        assert_eq!(err.to_string(), "Encoding failed: png writer error");
    }
}
