// SPDX-License-Identifier: MIT
//
// vrfs-color — the color codec for VRFS chat markup.
//
// Two representations, one conversion direction: 24-bit RGB (what sliders
// and hex fields speak) and the game's 3-digit quantized code (what the
// markup speaks). Quantization is deterministic and lossy; the inverse is
// never needed and never implemented. Parsing is strict and typed — a
// malformed hex string is an error, not three garbage channels.

pub mod code;
pub mod rgb;

pub use code::Code;
pub use rgb::{Channel, ColorError, Rgb};
