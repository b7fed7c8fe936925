//! Unit conversion constants and helpers.
//!
//! OOXML stores lengths in EMUs and font sizes in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert a point size to the `sz` attribute unit (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
