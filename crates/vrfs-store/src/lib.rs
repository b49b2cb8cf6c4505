//! # vrfs-store — editor state for the VRFS username editor
//!
//! This crate holds the one piece of mutable state in the system:
//!
//! - **[`config`]** — `EditorConfig`, the full configuration snapshot
//!   (username, base color, anchors, style flags) with the documented
//!   startup defaults
//! - **[`store`]** — `Store`, the observable store: typed partial updates
//!   handled by an explicit match, anchor position clamping after every
//!   mutation, and synchronous subscriber notification
//!
//! One store is constructed per editing session and passed explicitly to
//! whoever needs it — there is no process-wide singleton. Everything
//! downstream of the store (codec, composer) is pure, so recomputing on
//! every keystroke is the intended mode of operation.

pub mod config;
pub mod store;

pub use config::{DEFAULT_USERNAME, EditorConfig};
pub use store::{AnchorPatch, AnchorSlot, ConfigUpdate, Store, SubscriberId};
