// SPDX-License-Identifier: MIT
//
// Breakpoints and segment partitioning.
//
// A breakpoint is a (position, color) pair: the base color pins position 0
// and every enabled anchor adds one more. The sort is stable, so
// breakpoints sharing a position keep insertion order (base, anchor 2,
// anchor 3) and the earlier one collapses into a zero-length segment that
// is dropped.
//
// Positions index by chars, not bytes — slicing always lands on a char
// boundary. Grapheme clusters are deliberately not considered.

use vrfs_color::Rgb;

// ─── Anchor ──────────────────────────────────────────────────────────────────

/// A secondary color bound to a character offset in the username.
///
/// Only enabled anchors participate in composition. The owning store
/// clamps `position` into `0..username.chars().count()` on every mutation;
/// the partition itself stays total for out-of-range values regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// The color this anchor switches to.
    pub color: Rgb,
    /// Char offset where the color takes over.
    pub position: usize,
    /// Disabled anchors contribute nothing.
    pub enabled: bool,
}

impl Anchor {
    /// A disabled anchor parked at position 0 — the configuration default.
    #[must_use]
    pub const fn disabled(color: Rgb) -> Self {
        Self {
            color,
            position: 0,
            enabled: false,
        }
    }
}

// ─── Breakpoint ──────────────────────────────────────────────────────────────

/// A (position, color) pair used to compute segment boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Char offset where this color starts.
    pub position: usize,
    /// The color from here to the next breakpoint.
    pub color: Rgb,
}

/// Collect the breakpoints for a composition: the base color at position 0,
/// then every enabled anchor in declaration order, stably sorted by
/// position. Ties keep insertion order — base first, then anchor 2, then
/// anchor 3.
#[must_use]
pub fn breakpoints(base: Rgb, anchors: &[Anchor]) -> Vec<Breakpoint> {
    let mut points = Vec::with_capacity(1 + anchors.len());
    points.push(Breakpoint {
        position: 0,
        color: base,
    });
    points.extend(anchors.iter().filter(|a| a.enabled).map(|a| Breakpoint {
        position: a.position,
        color: a.color,
    }));
    // Vec::sort_by_key is stable; the tie-break IS the insertion order.
    points.sort_by_key(|p| p.position);
    points
}

// ─── Segment ─────────────────────────────────────────────────────────────────

/// A maximal contiguous run of the username sharing one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The raw substring — no escaping is applied.
    pub text: String,
    /// The run's color.
    pub color: Rgb,
}

/// Partition `username` into contiguous colored segments.
///
/// Breakpoint `i` spans from its position to the next breakpoint's
/// position (exclusive), or to the end of the string for the last one.
/// Zero-length spans are dropped — they contribute no visible text and no
/// markup tag. Since the base breakpoint pins position 0, the returned
/// texts always concatenate back to `username` exactly.
#[must_use]
pub fn partition(username: &str, points: &[Breakpoint]) -> Vec<Segment> {
    let char_count = username.chars().count();
    // Byte offset of every char boundary, plus the end of the string.
    let bounds: Vec<usize> = username
        .char_indices()
        .map(|(i, _)| i)
        .chain([username.len()])
        .collect();
    let byte_at = |pos: usize| bounds[pos.min(char_count)];

    let mut segments = Vec::new();
    for (i, point) in points.iter().enumerate() {
        let start = point.position.min(char_count);
        let end = points
            .get(i + 1)
            .map_or(char_count, |next| next.position.min(char_count));
        if end > start {
            segments.push(Segment {
                text: username[byte_at(start)..byte_at(end)].to_string(),
                color: point.color,
            });
        }
    }
    segments
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
