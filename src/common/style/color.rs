use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use songdeck::common::RGBColor;
///
/// let amber = RGBColor::new(255, 192, 0);
/// assert_eq!(RGBColor::from_hex("#FFC000"), Some(amber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts exactly six hexadecimal digits, optionally preceded by a single `#`.
    /// Anything else (short strings, signs, whitespace, non-ASCII) yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use songdeck::common::RGBColor;
    ///
    /// assert_eq!(RGBColor::from_hex("FFAA00"), Some(RGBColor::new(255, 170, 0)));
    /// assert_eq!(RGBColor::from_hex("#12"), None);
    /// assert_eq!(RGBColor::from_hex("#+F+F+F"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }

        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(pair(0)?, pair(2)?, pair(4)?))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use songdeck::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
