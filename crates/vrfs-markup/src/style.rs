// SPDX-License-Identifier: MIT
//
// Stylization flags and their markup tags.

bitflags::bitflags! {
    /// Stylization options as a compact bitfield.
    ///
    /// Each flag is independent — the game happily stacks them. The tag
    /// emission order is fixed (`<b>` `<i>` `<u>` `<sub>` `<mark>`) no
    /// matter the order the flags were toggled in.
    ///
    /// ```
    /// use vrfs_markup::Style;
    ///
    /// let style = Style::ITALIC | Style::BOLD;
    /// assert_eq!(style.tags(), "<b><i>");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Style: u8 {
        /// `<b>` — bold.
        const BOLD      = 1 << 0;
        /// `<i>` — italic.
        const ITALIC    = 1 << 1;
        /// `<u>` — underline.
        const UNDERLINE = 1 << 2;
        /// `<sub>` — small (subscript-sized) text.
        const SMALL     = 1 << 3;
        /// `<mark>` — highlighted text.
        const HIGHLIGHT = 1 << 4;
    }
}

impl Style {
    /// Append the open tags for the set flags, in the fixed order the game
    /// expects. VRFS markup is open-tag-only: there are no closing tags.
    pub(crate) fn write_tags(self, out: &mut String) {
        if self.contains(Self::BOLD) {
            out.push_str("<b>");
        }
        if self.contains(Self::ITALIC) {
            out.push_str("<i>");
        }
        if self.contains(Self::UNDERLINE) {
            out.push_str("<u>");
        }
        if self.contains(Self::SMALL) {
            out.push_str("<sub>");
        }
        if self.contains(Self::HIGHLIGHT) {
            out.push_str("<mark>");
        }
    }

    /// The open-tag run for the set flags.
    #[must_use]
    pub fn tags(self) -> String {
        let mut out = String::new();
        self.write_tags(&mut out);
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_no_tags() {
        assert_eq!(Style::empty().tags(), "");
    }

    #[test]
    fn single_flags() {
        assert_eq!(Style::BOLD.tags(), "<b>");
        assert_eq!(Style::ITALIC.tags(), "<i>");
        assert_eq!(Style::UNDERLINE.tags(), "<u>");
        assert_eq!(Style::SMALL.tags(), "<sub>");
        assert_eq!(Style::HIGHLIGHT.tags(), "<mark>");
    }

    #[test]
    fn emission_order_is_fixed() {
        // Toggle order must not leak into the output.
        assert_eq!((Style::HIGHLIGHT | Style::BOLD).tags(), "<b><mark>");
        assert_eq!((Style::SMALL | Style::ITALIC).tags(), "<i><sub>");
    }

    #[test]
    fn all_flags_stack() {
        assert_eq!(Style::all().tags(), "<b><i><u><sub><mark>");
    }
}
