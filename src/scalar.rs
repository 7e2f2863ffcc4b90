//! Coercion of numeric text to whole-pixel measurements
//!
//! Transcription sources report corner coordinates with sub-pixel
//! precision, usually as strings inside JSON payloads. Display geometry
//! works in whole pixels, so everything crossing that boundary is
//! truncated here, in one place, before any validation runs.

use crate::area::AreaError;

/// Parses `text` as a pixel measurement, truncating toward zero
///
/// Accepts an optionally negative decimal literal with an optional
/// fractional part: `"542"`, `"-3"`, `"542.1545"`, `"-3.9"`. The
/// fractional part is discarded, never rounded, so `"-3.9"` becomes `-3`.
/// Anything else fails with [`AreaError::MalformedScalar`].
pub fn to_px(text: &str) -> Result<i64, AreaError> {
    let malformed = || AreaError::MalformedScalar { text: text.to_string() };

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };

    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
    }

    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    // Truncating toward zero is exactly dropping the fraction, so only
    // the integer part is ever parsed
    int_part.parse::<i64>().map_err(|_| malformed())
}
