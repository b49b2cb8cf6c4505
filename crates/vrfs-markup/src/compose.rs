// SPDX-License-Identifier: MIT
//
// The segment composer — from an editor configuration to render segments,
// the final markup string, and advisory warnings.

use vrfs_color::{Code, Rgb};

use crate::segment::{Anchor, Segment, breakpoints, partition};
use crate::style::Style;

/// Maximum rendered markup length the game accepts, in chars.
///
/// Soft limit: exceeding it produces an advisory warning, never a
/// rejection.
pub const MAX_RENDERED_LEN: usize = 20;

/// Everything downstream consumers need from one composition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Ordered colored runs for preview rendering.
    pub segments: Vec<Segment>,
    /// The copyable markup string.
    pub markup: String,
    /// Advisory warnings, in display order. They never block the output.
    pub warnings: Vec<String>,
}

/// Compose the markup for `username` with the given colors and style.
///
/// Per non-empty segment the markup gets a `<#DDD>` color tag — unless the
/// segment's code is the `"999"` no-color sentinel, in which case the tag
/// is omitted entirely. The style tags follow the first emitted segment's
/// color tag (and only the first): the game applies open tags from there
/// on. Segment text is embedded raw; `<` and `>` in a username pass
/// through unescaped.
///
/// # Examples
///
/// ```
/// use vrfs_color::Rgb;
/// use vrfs_markup::{Style, compose};
///
/// let result = compose(
///     "computerK",
///     Rgb::new(255, 142, 57),
///     &[],
///     Style::BOLD | Style::ITALIC,
/// );
/// assert_eq!(result.markup, "<#952><b><i>computerK");
/// ```
#[must_use]
pub fn compose(username: &str, base: Rgb, anchors: &[Anchor], style: Style) -> Composition {
    let points = breakpoints(base, anchors);
    let segments = partition(username, &points);

    let mut markup = String::new();
    if segments.is_empty() {
        // Empty username: the applicable tags still render, with no text.
        push_color_tag(&mut markup, Code::from_rgb(base));
        style.write_tags(&mut markup);
    } else {
        for (i, segment) in segments.iter().enumerate() {
            push_color_tag(&mut markup, Code::from_rgb(segment.color));
            if i == 0 {
                style.write_tags(&mut markup);
            }
            markup.push_str(&segment.text);
        }
    }

    let warnings = advisories(base, style, &markup);
    Composition {
        segments,
        markup,
        warnings,
    }
}

/// `<#DDD>`, unless the code is the "999" no-color sentinel.
fn push_color_tag(out: &mut String, code: Code) {
    if !code.is_no_color() {
        out.push_str("<#");
        out.push_str(&code.to_string());
        out.push('>');
    }
}

/// The two advisory conditions surfaced to the user.
fn advisories(base: Rgb, style: Style, markup: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    // Style tags without an explicit color code do not render in the game
    // client — an upstream limitation, surfaced here.
    if Code::from_rgb(base).is_no_color() && !style.is_empty() {
        warnings.push("Color code is missing. Stylization tags will not work.".to_string());
    }

    let total = markup.chars().count();
    if total > MAX_RENDERED_LEN {
        warnings.push(format!(
            "Username exceeds maximum length ({total}/{MAX_RENDERED_LEN} characters)"
        ));
    }

    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
