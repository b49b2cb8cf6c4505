//! Editor configuration — the full snapshot the front-end renders from.

use vrfs_color::{Code, Rgb};
use vrfs_markup::{Anchor, Composition, Style, compose};

/// Username a fresh session starts with.
pub const DEFAULT_USERNAME: &str = "computerK";

/// The complete editor configuration.
///
/// Created once per session with [`Default`] values, mutated in place by
/// [`Store::update`](crate::store::Store::update), and never destroyed.
/// The hex string and the VRFS code are always derived from the stored
/// RGB — they are not independently-settable truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// The username being styled.
    pub username: String,
    /// The base color — always owns position 0.
    pub base_color: Rgb,
    /// The optional "second" and "third" colors, in that order.
    pub anchors: [Anchor; 2],
    /// The stylization flags.
    pub style: Style,
}

impl EditorConfig {
    /// The quantized code of the base color.
    #[must_use]
    pub fn base_code(&self) -> Code {
        Code::from_rgb(self.base_color)
    }

    /// Username length in chars — the unit anchor positions index by.
    #[must_use]
    pub fn username_len(&self) -> usize {
        self.username.chars().count()
    }

    /// Run the composer over this snapshot.
    #[must_use]
    pub fn compose(&self) -> Composition {
        compose(&self.username, self.base_color, &self.anchors, self.style)
    }
}

impl Default for EditorConfig {
    /// The documented startup defaults: `computerK` in `#FF8E39`
    /// (code 952), a green and a blue anchor parked disabled at
    /// position 0, no style flags.
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            base_color: Rgb::new(255, 142, 57),
            anchors: [
                Anchor::disabled(Rgb::new(0, 255, 0)),
                Anchor::disabled(Rgb::new(0, 0, 255)),
            ],
            style: Style::empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
