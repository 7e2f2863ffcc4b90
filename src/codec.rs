//! Storage codec for the two-point box form
//!
//! The storage engine persists an area as a pair of 2-D points,
//! `((x1,y1),(x2,y2))`, with its own conventions: Y grows upward and the
//! geometrically larger corner comes first. In image coordinates (Y
//! grows downward) the larger storage corner carries the same numbers as
//! the lower-right image corner, so the conversion is a pure relabeling
//! of fields. No coordinate is ever negated or offset.

use std::fmt;
use std::str::FromStr;

use crate::area::{Area, AreaError};
use crate::scalar;

/// Parses the stored two-point form into an [`Area`]
///
/// The grammar is strict: two parenthesized comma-separated numbers,
/// wrapped in one more pair of parentheses, with no whitespace. Numbers
/// may carry a fractional part (the engine stores reals) and are
/// truncated toward zero.
///
/// Text outside the grammar fails with [`AreaError::MalformedBox`];
/// well-formed text whose corners do not make a valid area fails with
/// [`AreaError::InvalidGeometry`], so callers can tell corrupt storage
/// apart from geometrically impossible values.
pub fn decode(text: &str) -> Result<Area, AreaError> {
    let malformed = || AreaError::MalformedBox { text: text.to_string() };

    let inner = text
        .strip_prefix("((")
        .and_then(|t| t.strip_suffix("))"))
        .ok_or_else(malformed)?;
    let (larger, smaller) = inner.split_once("),(").ok_or_else(malformed)?;

    let (x1, y1) = decode_point(larger).ok_or_else(malformed)?;
    let (x2, y2) = decode_point(smaller).ok_or_else(malformed)?;

    // Stored order is (larger corner, smaller corner) with Y up; those
    // are the lower-right and upper-left image corners verbatim
    Area::new(x2, y2, x1, y1)
}

/// Renders an [`Area`] in the stored two-point form
///
/// Exact inverse of [`decode`] for integer literals: larger corner
/// first, plain decimal digits, no whitespace. Infallible because a
/// constructed `Area` is always valid.
pub fn encode(area: &Area) -> String {
    format!(
        "(({},{}),({},{}))",
        area.lrx(),
        area.lry(),
        area.ulx(),
        area.uly()
    )
}

fn decode_point(text: &str) -> Option<(i64, i64)> {
    let (x, y) = text.split_once(',')?;
    Some((scalar::to_px(x).ok()?, scalar::to_px(y).ok()?))
}

impl FromStr for Area {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_relabels_storage_corners() {
        let area = decode("((4,3),(1,2))").unwrap();

        assert_eq!(area.ulx(), 1);
        assert_eq!(area.uly(), 2);
        assert_eq!(area.lrx(), 4);
        assert_eq!(area.lry(), 3);
    }

    #[test]
    fn decode_truncates_real_coordinates() {
        let area = decode("((557.196,893.079),(542.154,870.516))").unwrap();
        assert_eq!(area, Area::new(542, 870, 557, 893).unwrap());
    }

    #[test]
    fn decode_rejects_swapped_corners_as_geometry() {
        // Well-formed text, but corners describe a negative-width area
        assert!(matches!(
            decode("((1,3),(4,2))"),
            Err(AreaError::InvalidGeometry { ulx: 4, lrx: 1, .. })
        ));
    }

    #[test]
    fn decode_rejects_malformed_text() {
        for text in [
            "garbage",
            "",
            "((1,2),(3,4)",
            "(1,2),(3,4)",
            "((1,2),(3,4)) ",
            "((1, 2),(3,4))",
            "((1,2,3),(4,5))",
            "((1,2),(3,4),(5,6))",
            "((a,b),(c,d))",
        ] {
            assert_eq!(
                decode(text),
                Err(AreaError::MalformedBox { text: text.to_string() }),
                "expected {text:?} to be rejected as malformed"
            );
        }
    }

    #[test]
    fn encode_emits_larger_corner_first() {
        let area = Area::new(1, 2, 4, 3).unwrap();
        assert_eq!(encode(&area), "((4,3),(1,2))");
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let areas = [
            Area::new(1, 2, 4, 3).unwrap(),
            Area::new(542, 829, 1110, 906).unwrap(),
            Area::new(-20, -10, -5, 15).unwrap(),
        ];

        for area in areas {
            assert_eq!(decode(&encode(&area)), Ok(area));
        }
    }

    #[test]
    fn decode_then_encode_reproduces_the_text() {
        for text in ["((4,3),(1,2))", "((1110,906),(542,829))", "((-5,15),(-20,-10))"] {
            assert_eq!(encode(&decode(text).unwrap()), text);
        }
    }

    #[test]
    fn from_str_and_display_mirror_the_codec() {
        let area: Area = "((4,3),(1,2))".parse().unwrap();
        assert_eq!(area, Area::new(1, 2, 4, 3).unwrap());
        assert_eq!(area.to_string(), "((4,3),(1,2))");

        let bad: Result<Area, _> = "nonsense".parse();
        assert!(bad.is_err());
    }
}
