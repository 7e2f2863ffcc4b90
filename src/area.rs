//! Annotation area type and geometric operations
//!
//! This module defines the pure value type used to position transcribed
//! text regions on a page image. All coordinates are whole display pixels
//! in image space: X grows rightward, Y grows downward, so "upper-left"
//! means the numerically smaller corner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scalar;

/// Errors produced while constructing or operating on an [`Area`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AreaError {
    /// The corners do not describe a rectangle with positive width and height
    #[error("Degenerate area: lower-right ({lrx},{lry}) must lie strictly below-right of upper-left ({ulx},{uly})")]
    InvalidGeometry { ulx: i64, uly: i64, lrx: i64, lry: i64 },
    /// Text that was expected to hold a pixel measurement does not parse as one
    #[error("Not a pixel measurement: {text:?}")]
    MalformedScalar { text: String },
    /// Stored box literal does not match the `((x1,y1),(x2,y2))` grammar
    #[error("Malformed box literal: {text:?}")]
    MalformedBox { text: String },
    /// A span was requested over an empty collection of areas
    #[error("Cannot span an empty collection of areas")]
    EmptySpan,
    /// A slice was requested outside the partition it belongs to
    #[error("Slice {index} is out of range for a partition into {count} strips")]
    SliceOutOfRange { index: u32, count: u32 },
}

/// Rectangular region of a page image, in whole-pixel image coordinates
///
/// An `Area` is immutable once constructed and always satisfies
/// `lrx > ulx` and `lry > uly`. Operations that derive a new region
/// (`slice`, `span`) return fresh values through the same validating
/// constructor, so a degenerate `Area` cannot exist.
///
/// Serde representation is the four corner fields; deserialization runs
/// the same validation as [`Area::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Corners", into = "Corners")]
pub struct Area {
    ulx: i64,
    uly: i64,
    lrx: i64,
    lry: i64,
}

/// Plain mirror of an [`Area`]'s stored fields, used as the serde surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Corners {
    pub ulx: i64,
    pub uly: i64,
    pub lrx: i64,
    pub lry: i64,
}

impl From<Area> for Corners {
    fn from(area: Area) -> Self {
        Self {
            ulx: area.ulx,
            uly: area.uly,
            lrx: area.lrx,
            lry: area.lry,
        }
    }
}

impl TryFrom<Corners> for Area {
    type Error = AreaError;

    fn try_from(corners: Corners) -> Result<Self, Self::Error> {
        Area::new(corners.ulx, corners.uly, corners.lrx, corners.lry)
    }
}

impl Area {
    /// Creates a new area from upper-left and lower-right corners
    ///
    /// Fails with [`AreaError::InvalidGeometry`] unless `lrx > ulx` and
    /// `lry > uly`. Every other way of obtaining an `Area` funnels
    /// through this check.
    pub fn new(ulx: i64, uly: i64, lrx: i64, lry: i64) -> Result<Self, AreaError> {
        if lrx <= ulx || lry <= uly {
            return Err(AreaError::InvalidGeometry { ulx, uly, lrx, lry });
        }

        Ok(Self { ulx, uly, lrx, lry })
    }

    /// Creates an area from corner coordinates given as text
    ///
    /// Transcription payloads carry sub-pixel corners as strings
    /// (e.g. `"542.1545062142953"`); each field is truncated toward zero
    /// to whole pixels before the usual geometry validation runs.
    pub fn from_px_texts(ulx: &str, uly: &str, lrx: &str, lry: &str) -> Result<Self, AreaError> {
        Self::new(
            scalar::to_px(ulx)?,
            scalar::to_px(uly)?,
            scalar::to_px(lrx)?,
            scalar::to_px(lry)?,
        )
    }

    /// Returns the upper-left X coordinate
    pub fn ulx(&self) -> i64 {
        self.ulx
    }

    /// Returns the upper-left Y coordinate
    pub fn uly(&self) -> i64 {
        self.uly
    }

    /// Returns the lower-right X coordinate
    pub fn lrx(&self) -> i64 {
        self.lrx
    }

    /// Returns the lower-right Y coordinate
    pub fn lry(&self) -> i64 {
        self.lry
    }

    /// Returns the width in pixels, always positive
    pub fn width(&self) -> i64 {
        self.lrx - self.ulx
    }

    /// Returns the height in pixels, always positive
    pub fn height(&self) -> i64 {
        self.lry - self.uly
    }

    /// Returns true if `other` lies wholly within this area
    ///
    /// Containment is inclusive: an area contains itself, and sharing an
    /// edge with the container still counts. All four sides must hold;
    /// crossing any boundary by a single pixel fails the whole test.
    pub fn contains(&self, other: &Area) -> bool {
        other.ulx >= self.ulx && other.uly >= self.uly && other.lrx <= self.lrx && other.lry <= self.lry
    }

    /// Returns strip `index` of this area partitioned into `count`
    /// equal-width vertical strips
    ///
    /// Only the horizontal extent is divided; every strip keeps the full
    /// height. Strip width is the truncating division `width / count`;
    /// when the width does not divide evenly the final strip absorbs the
    /// remainder so that the strips always tile the original area.
    ///
    /// Fails with [`AreaError::SliceOutOfRange`] when `count` is zero or
    /// `index >= count`, and with [`AreaError::InvalidGeometry`] when
    /// `count` exceeds the width (a non-final strip would be empty).
    pub fn slice(&self, index: u32, count: u32) -> Result<Self, AreaError> {
        if count == 0 || index >= count {
            return Err(AreaError::SliceOutOfRange { index, count });
        }

        let slice_width = self.width() / i64::from(count);
        let ulx = self.ulx + i64::from(index) * slice_width;
        let lrx = if index == count - 1 {
            self.lrx
        } else {
            ulx + slice_width
        };

        Self::new(ulx, self.uly, lrx, self.lry)
    }

    /// Returns the minimal area enclosing every area in `areas`
    ///
    /// Fails with [`AreaError::EmptySpan`] when the iterator yields
    /// nothing; there is no meaningful enclosing box of nothing. Since
    /// min/max only ever widen a span, the result is guaranteed valid
    /// whenever the inputs are.
    pub fn span<'a, I>(areas: I) -> Result<Self, AreaError>
    where
        I: IntoIterator<Item = &'a Area>,
    {
        let mut areas = areas.into_iter();
        let first = areas.next().ok_or(AreaError::EmptySpan)?;

        let mut ulx = first.ulx;
        let mut uly = first.uly;
        let mut lrx = first.lrx;
        let mut lry = first.lry;

        for area in areas {
            ulx = ulx.min(area.ulx);
            uly = uly.min(area.uly);
            lrx = lrx.max(area.lrx);
            lry = lry.max(area.lry);
        }

        Self::new(ulx, uly, lrx, lry)
    }
}
