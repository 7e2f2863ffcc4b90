//! Bounding-box geometry for document annotation
//!
//! A page image carries transcribed text regions, each positioned by a
//! rectangular bounding box in image coordinates (Y grows downward).
//! This crate provides the validated, immutable [`Area`] value type with
//! its geometric operations, and the [`codec`] that round-trips an area
//! through the storage engine's Y-up two-point box literal.
//!
//! Persistence, API rendering and pointer tracking live outside this
//! crate; they only consume [`Area`] values and the codec functions.

pub mod area;
pub mod codec;
pub mod scalar;

pub use area::{Area, AreaError, Corners};
pub use codec::{decode, encode};
