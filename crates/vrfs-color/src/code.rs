// SPDX-License-Identifier: MIT
//
// The VRFS 3-digit color code.
//
// The game quantizes each RGB channel into ten buckets:
//
//   digit = round(v / 255 * 9)
//
// "999" (near-white) is the game's "default, no tag" marker. The composer
// special-cases the sentinel itself — "no color" is a property of the code,
// never re-derived from the RGB value some other way.

use std::fmt;

use crate::rgb::{ColorError, Rgb};

/// The game's 3-digit quantized color code — one digit 0-9 per channel.
///
/// Derivation is intentionally lossy (ten buckets over 256 values) and
/// never inverted; the editor only ever converts hex/RGB → code.
///
/// # Examples
///
/// ```
/// use vrfs_color::{Code, Rgb};
///
/// let code = Code::from_rgb(Rgb::new(255, 142, 57));
/// assert_eq!(code.to_string(), "952");
/// assert!(!code.is_no_color());
/// assert!(Code::from_rgb(Rgb::new(255, 255, 255)).is_no_color());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; 3]);

impl Code {
    /// The `"999"` sentinel: near-white renders with the chat default
    /// color and gets no `<#...>` tag at all.
    pub const NO_COLOR: Self = Self([9, 9, 9]);

    /// Quantize a 24-bit color to its 3-digit code.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self([quantize(rgb.r), quantize(rgb.g), quantize(rgb.b)])
    }

    /// Parse-and-quantize convenience: hex string straight to code.
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError`] from hex parsing.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        Ok(Self::from_rgb(Rgb::from_hex(s)?))
    }

    /// The three digits, each 0..=9.
    #[inline]
    #[must_use]
    pub const fn digits(self) -> [u8; 3] {
        self.0
    }

    /// Whether this is the "default, no tag" sentinel.
    #[inline]
    #[must_use]
    pub const fn is_no_color(self) -> bool {
        self.0[0] == 9 && self.0[1] == 9 && self.0[2] == 9
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r}{g}{b}")
    }
}

/// Quantize one channel: `round(v / 255 * 9)`, half-up, in exact integer
/// arithmetic — `floor(v*9/255 + 1/2)` = `(18v + 255) / 510`.
#[allow(clippy::cast_possible_truncation)] // Result is at most 9.
const fn quantize(v: u8) -> u8 {
    ((v as u16 * 18 + 255) / 510) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Quantization ─────────────────────────────────────────────────────

    #[test]
    fn quantize_known_values() {
        // 255/255*9 = 9, 142/255*9 ≈ 5.01 → 5, 57/255*9 ≈ 2.01 → 2.
        assert_eq!(Code::from_rgb(Rgb::new(255, 142, 57)).to_string(), "952");
        assert_eq!(Code::from_rgb(Rgb::new(0, 0, 0)).to_string(), "000");
        assert_eq!(Code::from_rgb(Rgb::new(255, 255, 255)).to_string(), "999");
    }

    #[test]
    fn quantize_bucket_edges() {
        // 14/255*9 ≈ 0.494 rounds down; 15/255*9 ≈ 0.529 rounds up.
        assert_eq!(quantize(14), 0);
        assert_eq!(quantize(15), 1);
        // 128/255*9 ≈ 4.52 → 5.
        assert_eq!(quantize(128), 5);
    }

    #[test]
    fn digits_always_in_range() {
        for v in 0..=255_u8 {
            assert!(quantize(v) <= 9, "quantize({v}) left the 0-9 scale");
        }
    }

    #[test]
    fn quantization_is_monotonic() {
        for v in 1..=255_u8 {
            assert!(
                quantize(v) >= quantize(v - 1),
                "quantize({v}) < quantize({})",
                v - 1
            );
        }
    }

    // ── The "999" sentinel ───────────────────────────────────────────────

    #[test]
    fn near_white_hits_the_sentinel() {
        // Everything in the top bucket quantizes to 999, not just #FFFFFF.
        assert!(Code::from_rgb(Rgb::new(242, 248, 251)).is_no_color());
        assert_eq!(Code::from_rgb(Rgb::new(242, 248, 251)), Code::NO_COLOR);
    }

    #[test]
    fn colored_values_are_not_the_sentinel() {
        assert!(!Code::from_rgb(Rgb::new(255, 142, 57)).is_no_color());
        assert!(!Code::from_rgb(Rgb::new(0, 0, 0)).is_no_color());
    }

    // ── Convenience ──────────────────────────────────────────────────────

    #[test]
    fn from_hex_composes_parse_and_quantize() {
        assert_eq!(Code::from_hex("#FF8E39").unwrap().to_string(), "952");
        assert_eq!(Code::from_hex("bad"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn digits_accessor() {
        assert_eq!(Code::from_rgb(Rgb::new(255, 142, 57)).digits(), [9, 5, 2]);
    }
}
