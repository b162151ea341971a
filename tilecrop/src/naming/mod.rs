//! Tile name grammar: encoding offsets into names and decoding them back.
//!
//! Generated names follow the format:
//! `{base}Crop{index}X{dx}Y{dy}`
//!
//! Examples:
//! - `imgCrop0X0.5Y0.5` (first tile of a 2×2 grid over a 2m×2m object)
//! - `muralCrop7X-1.25Y0.75`
//!
//! The offsets are formatted with Rust's `f32` `Display`, which is
//! locale-independent (no thousands separators, `.` decimal mark) and
//! prints the shortest decimal that parses back to the identical value,
//! so `extract_offset` recovers the encoded offset exactly.
//!
//! Known fragility, kept for format compatibility: decoding scans for the
//! literal markers `X` and `Y`, so a base name containing either letter
//! immediately followed by digits corrupts the result. Callers should
//! choose base names avoiding that shape.

use crate::grid::PhysicalOffset;

/// Error decoding a tile name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedName {
    /// No `X` marker present in the name.
    MissingX,
    /// No `Y` marker present after the first `X`.
    MissingY,
    /// The substring between `X` and `Y` is not a decimal number.
    InvalidX(String),
    /// The substring after `Y` is not a decimal number.
    InvalidY(String),
}

impl std::fmt::Display for MalformedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedName::MissingX => write!(f, "Name has no 'X' offset marker"),
            MalformedName::MissingY => write!(f, "Name has no 'Y' marker after 'X'"),
            MalformedName::InvalidX(s) => write!(f, "Invalid X offset: '{}'", s),
            MalformedName::InvalidY(s) => write!(f, "Invalid Y offset: '{}'", s),
        }
    }
}

impl std::error::Error for MalformedName {}

/// Encode a tile name from its base name, flat index, and offset.
///
/// Always produces a well-formed name for valid inputs; never fails.
///
/// # Examples
///
/// ```
/// use tilecrop::naming::encode_tile_name;
///
/// assert_eq!(encode_tile_name("img", 0, 0.5, 0.5), "imgCrop0X0.5Y0.5");
/// assert_eq!(encode_tile_name("img", 3, -0.5, -0.5), "imgCrop3X-0.5Y-0.5");
/// ```
pub fn encode_tile_name(base: &str, index: u32, dx: f32, dy: f32) -> String {
    format!("{}Crop{}X{}Y{}", base, index, dx, dy)
}

/// Decode the physical offset embedded in a previously generated name.
///
/// Locates the first `X`, the first `Y` after it, and parses the
/// substring between them as `dx` and the remainder as `dy`.
///
/// # Examples
///
/// ```
/// use tilecrop::naming::extract_offset;
///
/// let offset = extract_offset("imgCrop0X0.5Y0.5").unwrap();
/// assert_eq!(offset.dx, 0.5);
/// assert_eq!(offset.dy, 0.5);
/// ```
///
/// # Errors
///
/// Returns [`MalformedName`] when either marker is absent (including a
/// `Y` occurring only at or before the `X`) or either substring is not
/// a valid decimal number.
pub fn extract_offset(name: &str) -> Result<PhysicalOffset, MalformedName> {
    let x = name.find('X').ok_or(MalformedName::MissingX)?;
    let after_x = &name[x + 1..];
    let y = after_x.find('Y').ok_or(MalformedName::MissingY)?;

    let dx_str = &after_x[..y];
    let dy_str = &after_x[y + 1..];

    let dx = dx_str
        .parse::<f32>()
        .map_err(|_| MalformedName::InvalidX(dx_str.to_string()))?;
    let dy = dy_str
        .parse::<f32>()
        .map_err(|_| MalformedName::InvalidY(dy_str.to_string()))?;

    Ok(PhysicalOffset::new(dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Encoding tests
    // ========================================================================

    #[test]
    fn test_encode_first_tile() {
        assert_eq!(encode_tile_name("img", 0, 0.5, 0.5), "imgCrop0X0.5Y0.5");
    }

    #[test]
    fn test_encode_negative_offsets() {
        assert_eq!(
            encode_tile_name("img", 3, -0.5, -0.5),
            "imgCrop3X-0.5Y-0.5"
        );
    }

    #[test]
    fn test_encode_zero_offsets() {
        assert_eq!(encode_tile_name("wall", 0, 0.0, 0.0), "wallCrop0X0Y0");
    }

    #[test]
    fn test_encode_fractional_offsets() {
        assert_eq!(
            encode_tile_name("mural", 7, -1.25, 0.75),
            "muralCrop7X-1.25Y0.75"
        );
    }

    // ========================================================================
    // Round-trip tests
    // ========================================================================

    #[test]
    fn test_round_trip_simple() {
        let name = encode_tile_name("img", 0, 0.5, 0.5);
        let offset = extract_offset(&name).unwrap();
        assert_eq!(offset, PhysicalOffset::new(0.5, 0.5));
    }

    #[test]
    fn test_round_trip_awkward_floats() {
        // Values without a short decimal representation still round-trip
        // exactly because f32 Display prints a shortest-exact form
        for &(dx, dy) in &[
            (1.0f32 / 3.0, 2.0f32 / 3.0),
            (0.1, 0.2),
            (123.456, -654.321),
            (f32::MIN_POSITIVE, -f32::MIN_POSITIVE),
        ] {
            let name = encode_tile_name("img", 0, dx, dy);
            let offset = extract_offset(&name).unwrap();
            assert_eq!(offset.dx, dx, "dx failed for {}", name);
            assert_eq!(offset.dy, dy, "dy failed for {}", name);
        }
    }

    #[test]
    fn test_decode_zero_offsets() {
        let offset = extract_offset("wallCrop0X0Y0").unwrap();
        assert_eq!(offset, PhysicalOffset::new(0.0, 0.0));
    }

    // ========================================================================
    // Malformed name tests
    // ========================================================================

    #[test]
    fn test_decode_non_conforming_name() {
        // Markers present but nothing numeric between them
        let result = extract_offset("noXorY");
        assert_eq!(result, Err(MalformedName::InvalidX("or".to_string())));
    }

    #[test]
    fn test_decode_name_without_markers() {
        assert_eq!(extract_offset("no_markers"), Err(MalformedName::MissingX));
    }

    #[test]
    fn test_decode_missing_x() {
        assert_eq!(extract_offset("imgCrop0"), Err(MalformedName::MissingX));
        assert_eq!(extract_offset(""), Err(MalformedName::MissingX));
    }

    #[test]
    fn test_decode_missing_y() {
        assert_eq!(
            extract_offset("imgCrop0X0.5"),
            Err(MalformedName::MissingY)
        );
    }

    #[test]
    fn test_decode_y_before_x() {
        // A 'Y' only at or before the 'X' marker does not count
        assert_eq!(extract_offset("Y0.5X0.5"), Err(MalformedName::MissingY));
    }

    #[test]
    fn test_decode_empty_dx() {
        let result = extract_offset("imgCrop0XY0.5");
        assert_eq!(result, Err(MalformedName::InvalidX(String::new())));
    }

    #[test]
    fn test_decode_empty_dy() {
        let result = extract_offset("imgCrop0X0.5Y");
        assert_eq!(result, Err(MalformedName::InvalidY(String::new())));
    }

    #[test]
    fn test_decode_garbage_dx() {
        let result = extract_offset("imgCrop0XabcY0.5");
        assert_eq!(result, Err(MalformedName::InvalidX("abc".to_string())));
    }

    #[test]
    fn test_decode_garbage_dy() {
        let result = extract_offset("imgCrop0X0.5Yabc");
        assert_eq!(result, Err(MalformedName::InvalidY("abc".to_string())));
    }

    #[test]
    fn test_decode_known_fragility_base_name_with_marker() {
        // A base name containing 'X' followed by digits shifts the parse:
        // the first 'X' wins, so the recovered dx is wrong. Documented
        // behavior of the format, not a guarantee.
        let name = encode_tile_name("boX1", 0, 0.5, 0.5);
        assert_eq!(name, "boX1Crop0X0.5Y0.5");
        let result = extract_offset(&name);
        assert_eq!(
            result,
            Err(MalformedName::InvalidX("1Crop0X0.5".to_string()))
        );
    }

    // ========================================================================
    // Error display tests
    // ========================================================================

    #[test]
    fn test_malformed_name_display() {
        assert_eq!(
            MalformedName::MissingX.to_string(),
            "Name has no 'X' offset marker"
        );
        assert_eq!(
            MalformedName::MissingY.to_string(),
            "Name has no 'Y' marker after 'X'"
        );
        assert_eq!(
            MalformedName::InvalidX("abc".to_string()).to_string(),
            "Invalid X offset: 'abc'"
        );
        assert_eq!(
            MalformedName::InvalidY("..".to_string()).to_string(),
            "Invalid Y offset: '..'"
        );
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_encode_decode_round_trip(
                index in 0u32..100_000,
                dx in -10_000.0f32..10_000.0,
                dy in -10_000.0f32..10_000.0
            ) {
                let name = encode_tile_name("img", index, dx, dy);
                let offset = extract_offset(&name).unwrap();
                prop_assert_eq!(offset.dx, dx);
                prop_assert_eq!(offset.dy, dy);
            }

            #[test]
            fn test_decode_never_panics(name in "\\PC*") {
                // Arbitrary input either decodes or reports a malformed name
                let _ = extract_offset(&name);
            }
        }
    }
}
