//! Spatial anchor placeholders for tile content placement.
//!
//! Each tile gets a zero-content anchor positioned at the tile's physical
//! offset, intended as a parent for later content so that content lands
//! centred on the tile it belongs to. The anchor sits a fixed distance in
//! front of the imaged surface along the depth axis; which world axis is
//! "depth" depends on the [`AnchorConfig::invert_yz`] setting.

use serde::{Deserialize, Serialize};

use crate::grid::{PhysicalOffset, Tile};

/// Default distance of an anchor from the imaged surface, in the same
/// unit as the physical extent (typically metres).
pub const DEFAULT_DISTANCE_FROM_SOURCE: f32 = 0.1;

/// Configuration for anchor placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorConfig {
    /// Swap which axis maps to depth vs. height. When `true` (the
    /// default) the offset's `dy` goes to the world Z axis and the
    /// source distance to Y; when `false` the mapping is the reverse.
    pub invert_yz: bool,

    /// Fixed offset along the depth axis, in physical units.
    pub distance_from_source: f32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            invert_yz: true,
            distance_from_source: DEFAULT_DISTANCE_FROM_SOURCE,
        }
    }
}

impl AnchorConfig {
    /// Set the axis inversion.
    pub fn with_invert_yz(mut self, invert_yz: bool) -> Self {
        self.invert_yz = invert_yz;
        self
    }

    /// Set the distance from the imaged surface.
    pub fn with_distance_from_source(mut self, distance: f32) -> Self {
        self.distance_from_source = distance;
        self
    }
}

/// A zero-content anchor placed at a tile's physical offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Name of the tile this anchor belongs to.
    pub name: String,
    /// World position as `[x, y, z]`.
    pub position: [f32; 3],
}

impl Anchor {
    /// Build the anchor for a tile.
    pub fn for_tile(tile: &Tile, config: &AnchorConfig) -> Self {
        Self::from_offset(tile.name.clone(), tile.offset, config)
    }

    /// Build an anchor from a name and a physical offset.
    pub fn from_offset(name: String, offset: PhysicalOffset, config: &AnchorConfig) -> Self {
        let position = if config.invert_yz {
            [offset.dx, config.distance_from_source, offset.dy]
        } else {
            [offset.dx, offset.dy, config.distance_from_source]
        };
        Self { name, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnchorConfig::default();
        assert!(config.invert_yz);
        assert_eq!(config.distance_from_source, 0.1);
    }

    #[test]
    fn test_builder_methods() {
        let config = AnchorConfig::default()
            .with_invert_yz(false)
            .with_distance_from_source(0.25);
        assert!(!config.invert_yz);
        assert_eq!(config.distance_from_source, 0.25);
    }

    #[test]
    fn test_inverted_axes_put_dy_on_z() {
        let anchor = Anchor::from_offset(
            "imgCrop0X0.5Y0.5".to_string(),
            PhysicalOffset::new(0.5, -0.75),
            &AnchorConfig::default(),
        );
        assert_eq!(anchor.position, [0.5, 0.1, -0.75]);
    }

    #[test]
    fn test_plain_axes_put_dy_on_y() {
        let config = AnchorConfig::default().with_invert_yz(false);
        let anchor = Anchor::from_offset(
            "imgCrop0X0.5Y0.5".to_string(),
            PhysicalOffset::new(0.5, -0.75),
            &config,
        );
        assert_eq!(anchor.position, [0.5, -0.75, 0.1]);
    }

    #[test]
    fn test_json_round_trip() {
        let anchor = Anchor {
            name: "imgCrop0X0.5Y0.5".to_string(),
            position: [0.5, 0.1, 0.5],
        };
        let json = serde_json::to_string(&anchor).unwrap();
        let parsed: Anchor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, anchor);
    }
}
