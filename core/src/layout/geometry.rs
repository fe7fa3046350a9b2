//! Coordinate mapper — logical grid cells to pixel geometry and back.
//!
//! Position strings use the 1-based `Tab<N>!R<row>C<col>` encoding; loaded
//! components carry 0-based row/col. Pixel geometry is the logical cell
//! multiplied by a fixed unit size, applied only at render time.

use crate::error::{LayoutError, Result};


/// A 0-based logical grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}


/// Pixel-space rectangle produced for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}


/// Map a logical cell rectangle to pixels.
pub fn to_pixels(row: u32, col: u32, width: u32, height: u32, unit_size: u32) -> PixelRect {
    PixelRect {
        x: col * unit_size,
        y: row * unit_size,
        width: width * unit_size,
        height: height * unit_size,
    }
}


/// Parse a `Tab<N>!R<row>C<col>` position string into a 0-based grid position.
///
/// Row and column are 1-based in the encoding; anything that does not match
/// the full pattern is a `MalformedPosition` error — callers decide whether
/// to default or reject.
pub fn parse_position(s: &str) -> Result<GridPos> {
    let malformed = || LayoutError::MalformedPosition { value: s.into() };

    let rest = s.strip_prefix("Tab").ok_or_else(malformed)?;
    let (tab_digits, cell) = rest.split_once('!').ok_or_else(malformed)?;
    if tab_digits.is_empty() || !tab_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let cell = cell.strip_prefix('R').ok_or_else(malformed)?;
    let (row_digits, col_digits) = cell.split_once('C').ok_or_else(malformed)?;
    let row: u32 = row_digits.parse().map_err(|_| malformed())?;
    let col: u32 = col_digits.parse().map_err(|_| malformed())?;
    if row == 0 || col == 0 {
        return Err(malformed());
    }

    Ok(GridPos {
        row: row - 1,
        col: col - 1,
    })
}


/// Inverse of `parse_position`: 0-based row/col to the 1-based encoding.
pub fn format_position(tab_index: u32, row: u32, col: u32) -> String {
    format!("Tab{}!R{}C{}", tab_index, row + 1, col + 1)
}


/// Numeric index of a `tab_<N>` identifier (`tab_12` -> 12).
pub fn tab_index(tab_id: &str) -> Result<u32> {
    tab_id
        .strip_prefix("tab_")
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .ok_or_else(|| LayoutError::UnknownTab {
            tab: tab_id.into(),
        })
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_cells_to_pixels() {
        let px = to_pixels(1, 2, 2, 1, 80);
        assert_eq!(
            px,
            PixelRect {
                x: 160,
                y: 80,
                width: 160,
                height: 80
            }
        );
    }

    #[test]
    fn origin_cell_maps_to_origin_pixels() {
        let px = to_pixels(0, 0, 1, 1, 80);
        assert_eq!(px.x, 0);
        assert_eq!(px.y, 0);
        assert_eq!(px.width, 80);
    }

    #[test]
    fn parses_one_based_to_zero_based() {
        assert_eq!(parse_position("Tab1!R1C1").unwrap(), GridPos { row: 0, col: 0 });
        assert_eq!(parse_position("Tab2!R3C4").unwrap(), GridPos { row: 2, col: 3 });
    }

    #[test]
    fn parses_multi_digit_coordinates() {
        assert_eq!(
            parse_position("Tab12!R10C27").unwrap(),
            GridPos { row: 9, col: 26 }
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        for s in [
            "",
            "R1C1",
            "Tab!R1C1",
            "Tab1R1C1",
            "Tab1!C1",
            "Tab1!R1",
            "Tab1!RxC1",
            "Tab1!R1Cx",
            "Tabx!R1C1",
        ] {
            assert!(parse_position(s).is_err(), "should reject '{}'", s);
        }
    }

    #[test]
    fn rejects_zero_based_encoding() {
        // The wire format is 1-based; R0/C0 would underflow.
        assert!(parse_position("Tab1!R0C1").is_err());
        assert!(parse_position("Tab1!R1C0").is_err());
    }

    #[test]
    fn format_is_inverse_of_parse() {
        let s = format_position(1, 2, 0);
        assert_eq!(s, "Tab1!R3C1");
        assert_eq!(parse_position(&s).unwrap(), GridPos { row: 2, col: 0 });
    }

    #[test]
    fn tab_index_parses_full_number() {
        assert_eq!(tab_index("tab_1").unwrap(), 1);
        // Not just the last character.
        assert_eq!(tab_index("tab_12").unwrap(), 12);
        assert!(tab_index("tab_0").is_err());
        assert!(tab_index("dashboard_1").is_err());
        assert!(tab_index("tab_").is_err());
    }
}
