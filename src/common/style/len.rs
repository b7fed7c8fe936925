use std::fmt;

use crate::common::unit::{EMUS_PER_INCH, EMUS_PER_PT};

/// Length measurement with units.
///
/// Office formats primarily use EMUs (English Metric Units); slide geometry
/// in songdeck is configured in inches and converted here.
///
/// # Examples
///
/// ```rust
/// use songdeck::common::Length;
///
/// let length = Length::from_inches(13.33);
/// assert_eq!(length.emus(), 12_188_952);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches, rounded to the nearest EMU.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64).round() as i64,
        }
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emus() {
        assert_eq!(Length::from_inches(1.0).emus(), 914_400);
        assert_eq!(Length::from_inches(7.5).emus(), 6_858_000);
        assert_eq!(Length::from_inches(0.0).emus(), 0);
    }

    #[test]
    fn test_points() {
        assert!((Length::from_inches(1.0).points() - 72.0).abs() < 1e-9);
        assert_eq!(Length::from_inches(2.5).to_string(), "2.50\"");
    }
}
