//! The observable configuration store.
//!
//! Updates arrive as a tagged union ([`ConfigUpdate`]) handled by an
//! explicit match — one variant per thing the front-end can change. After
//! every mutation the store re-clamps anchor positions against the
//! current username and synchronously notifies every subscriber with the
//! full new snapshot. No batching, no async dispatch.

use vrfs_color::Rgb;
use vrfs_markup::Style;

use crate::config::EditorConfig;

// ─── Updates ────────────────────────────────────────────────────────────────

/// Which of the two optional color anchors an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSlot {
    /// The "second color" — the first anchor.
    Second,
    /// The "third color" — the second anchor.
    Third,
}

impl AnchorSlot {
    /// Index into [`EditorConfig::anchors`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Second => 0,
            Self::Third => 1,
        }
    }
}

/// A field-wise partial update for one anchor. `None` keeps the current
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorPatch {
    /// Replace the anchor's color.
    pub color: Option<Rgb>,
    /// Move the anchor. Clamped against the username after applying.
    pub position: Option<usize>,
    /// Enable or disable the anchor.
    pub enabled: Option<bool>,
}

impl AnchorPatch {
    /// A patch that only replaces the color.
    #[must_use]
    pub const fn color(color: Rgb) -> Self {
        Self {
            color: Some(color),
            position: None,
            enabled: None,
        }
    }

    /// A patch that only moves the anchor.
    #[must_use]
    pub const fn position(position: usize) -> Self {
        Self {
            color: None,
            position: Some(position),
            enabled: None,
        }
    }

    /// A patch that only toggles the anchor.
    #[must_use]
    pub const fn enabled(enabled: bool) -> Self {
        Self {
            color: None,
            position: None,
            enabled: Some(enabled),
        }
    }
}

/// A typed partial update — one variant per thing the front-end can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigUpdate {
    /// Replace the username.
    Username(String),
    /// Replace the base color.
    BaseColor(Rgb),
    /// Patch one anchor's fields.
    Anchor {
        /// Which anchor.
        slot: AnchorSlot,
        /// What to change.
        patch: AnchorPatch,
    },
    /// Replace the whole style flag set. Flags are cheap to rebuild from
    /// checkbox state, so there is no per-flag variant.
    Style(Style),
}

// ─── Store ──────────────────────────────────────────────────────────────────

/// Handle returned by [`Store::subscribe`]; pass it to
/// [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&EditorConfig)>;

/// The observable configuration store.
///
/// One per editing session, owned by the front-end loop and passed
/// explicitly to call sites. Subscribers run synchronously on the
/// updating call stack, in subscription order.
pub struct Store {
    config: EditorConfig,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl Store {
    /// A store with the documented startup defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// A store seeded with an explicit configuration. Anchor positions are
    /// clamped against the username immediately.
    #[must_use]
    pub fn with_config(mut config: EditorConfig) -> Self {
        clamp_anchors(&mut config);
        Self {
            config,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one update, re-clamp anchor positions, and notify all
    /// subscribers with the new snapshot.
    pub fn update(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::Username(username) => self.config.username = username,
            ConfigUpdate::BaseColor(color) => self.config.base_color = color,
            ConfigUpdate::Anchor { slot, patch } => {
                let anchor = &mut self.config.anchors[slot.index()];
                if let Some(color) = patch.color {
                    anchor.color = color;
                }
                if let Some(position) = patch.position {
                    anchor.position = position;
                }
                if let Some(enabled) = patch.enabled {
                    anchor.enabled = enabled;
                }
            }
            ConfigUpdate::Style(style) => self.config.style = style,
        }
        clamp_anchors(&mut self.config);
        self.notify();
    }

    /// Restore the startup defaults and notify.
    pub fn reset(&mut self) {
        self.config = EditorConfig::default();
        self.notify();
    }

    /// Register a change callback, invoked synchronously with the full new
    /// snapshot after every update. The callback is NOT invoked at
    /// subscription time — render once from [`config`](Self::config) first.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriberId
    where
        F: FnMut(&EditorConfig) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&mut self) {
        let config = &self.config;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(config);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp every anchor position into `0..username_len` — to
/// `max(0, len - 1)`, or 0 for an empty username. Runs after every
/// mutation so the composer always sees valid positions.
fn clamp_anchors(config: &mut EditorConfig) {
    let limit = config.username_len().saturating_sub(1);
    for anchor in &mut config.anchors {
        anchor.position = anchor.position.min(limit);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
