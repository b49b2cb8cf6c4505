// SPDX-License-Identifier: MIT
//
// RGB color representation and hex parsing.
//
// Channels are `u8`, so a constructed `Rgb` is always in range — range
// checking happens exactly once, at the boundary (`from_channels`,
// `from_hex`). The hex string and the VRFS code are derived on demand,
// never stored as independently-settable truth.

use std::fmt;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color channel name, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Green => f.write_str("green"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// Failure to construct an [`Rgb`] from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// Not exactly six hex digits (with an optional leading `#`).
    InvalidHex,
    /// A raw channel value fell outside `0..=255`.
    OutOfRangeChannel {
        /// Which channel was out of range.
        channel: Channel,
        /// The offending value.
        value: i64,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex => f.write_str("invalid hex color (expected six hex digits)"),
            Self::OutOfRangeChannel { channel, value } => {
                write!(f, "{channel} channel out of range: {value} (expected 0-255)")
            }
        }
    }
}

impl std::error::Error for ColorError {}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit RGB color.
///
/// # Examples
///
/// ```
/// use vrfs_color::Rgb;
///
/// let orange = Rgb::from_hex("#FF8E39").unwrap();
/// assert_eq!(orange, Rgb::new(255, 142, 57));
/// assert_eq!(orange.hex(), "FF8E39");
/// assert_eq!(orange.to_string(), "#FF8E39");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Checked constructor for raw integer channels (slider values,
    /// command-line input).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRangeChannel`] naming the first channel
    /// outside `0..=255`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        Ok(Self::new(
            channel(Channel::Red, r)?,
            channel(Channel::Green, g)?,
            channel(Channel::Blue, b)?,
        ))
    }

    /// Parse a hex color string: exactly six hex digits, case-insensitive,
    /// with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for any other shape — wrong
    /// length, non-hex bytes, empty string.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 {
            return Err(ColorError::InvalidHex);
        }
        let bytes = s.as_bytes();
        Ok(Self::new(
            parse_hex_byte(bytes[0], bytes[1])?,
            parse_hex_byte(bytes[2], bytes[3])?,
            parse_hex_byte(bytes[4], bytes[5])?,
        ))
    }

    /// The derived hex form: uppercase `RRGGBB`, zero-padded, no `#`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    /// `#RRGGBB` — the form color pickers display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(hi: u8, lo: u8) -> Result<u8, ColorError> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
        _ => Err(ColorError::InvalidHex),
    }
}

#[inline]
fn channel(channel: Channel, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::OutOfRangeChannel { channel, value })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Hex parsing ──────────────────────────────────────────────────────

    #[test]
    fn parse_with_hash() {
        assert_eq!(Rgb::from_hex("#FF8E39"), Ok(Rgb::new(255, 142, 57)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::from_hex("00FF00"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn parse_lowercase() {
        assert_eq!(Rgb::from_hex("#ff8e39"), Ok(Rgb::new(255, 142, 57)));
    }

    #[test]
    fn parse_extremes() {
        assert_eq!(Rgb::from_hex("000000"), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(Rgb::from_hex("FFFFFF"), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn parse_invalid_is_typed_error() {
        // Malformed input is a typed failure, never three garbage channels.
        assert_eq!(Rgb::from_hex(""), Err(ColorError::InvalidHex));
        assert_eq!(Rgb::from_hex("#12345"), Err(ColorError::InvalidHex));
        assert_eq!(Rgb::from_hex("#1234567"), Err(ColorError::InvalidHex));
        assert_eq!(Rgb::from_hex("GG8E39"), Err(ColorError::InvalidHex));
        assert_eq!(Rgb::from_hex("#FF 8E3"), Err(ColorError::InvalidHex));
        assert_eq!(Rgb::from_hex("not a color"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn parse_rejects_short_forms() {
        // The markup editor only ever deals in full six-digit colors.
        assert_eq!(Rgb::from_hex("#F83"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn hex_roundtrip_uppercases() {
        for input in ["#ff8e39", "FF8E39", "#AbCdEf", "012345"] {
            let rgb = Rgb::from_hex(input).unwrap();
            let normalized = input.trim_start_matches('#').to_uppercase();
            assert_eq!(rgb.hex(), normalized);
        }
    }

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(Rgb::new(0, 7, 15).hex(), "00070F");
    }

    // ── Channel boundary ─────────────────────────────────────────────────

    #[test]
    fn channels_in_range() {
        assert_eq!(Rgb::from_channels(255, 142, 57), Ok(Rgb::new(255, 142, 57)));
        assert_eq!(Rgb::from_channels(0, 0, 0), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn channels_out_of_range() {
        assert_eq!(
            Rgb::from_channels(256, 0, 0),
            Err(ColorError::OutOfRangeChannel {
                channel: Channel::Red,
                value: 256
            })
        );
        assert_eq!(
            Rgb::from_channels(0, -1, 0),
            Err(ColorError::OutOfRangeChannel {
                channel: Channel::Green,
                value: -1
            })
        );
        assert_eq!(
            Rgb::from_channels(0, 0, 9000),
            Err(ColorError::OutOfRangeChannel {
                channel: Channel::Blue,
                value: 9000
            })
        );
    }

    // ── Display ──────────────────────────────────────────────────────────

    #[test]
    fn display_forms() {
        let rgb = Rgb::new(255, 142, 57);
        assert_eq!(rgb.to_string(), "#FF8E39");
        assert_eq!(
            ColorError::InvalidHex.to_string(),
            "invalid hex color (expected six hex digits)"
        );
        assert_eq!(
            ColorError::OutOfRangeChannel {
                channel: Channel::Blue,
                value: 300
            }
            .to_string(),
            "blue channel out of range: 300 (expected 0-255)"
        );
    }
}
