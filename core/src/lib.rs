//! HERALD core engine.
//!
//! The engine sits between a host-side event tap and the outputs of an
//! accessibility layer for a digital card game. It has two halves:
//!
//! - **Narration**: opaque game events are classified into a closed
//!   taxonomy, rendered as short announcements against match-scoped state,
//!   and pushed through a priority-aware duplicate filter.
//! - **Panel tracking**: three unreliable detection sources (patch hooks,
//!   reflective polling, alpha polling) are reconciled into a single
//!   authoritative view of which UI panels are visible.
//!
//! The host drives everything through [`Narrator`]: `deliver` for events,
//! `tick` for per-frame polling, and the `take_*` drain queues for output.
//! Everything runs on one logical thread; no call blocks or spawns.

pub mod announce;
pub mod config;
pub mod error;
pub mod events;
pub mod narrator;
pub mod panels;
pub mod session;


pub use announce::{Announcement, DuplicateFilter};
pub use error::HeraldError;
pub use events::{EventFields, EventKind, FieldMap, FieldValue, classify};
pub use narrator::{Narrator, TargetingMode};
pub use panels::{
    HandleRef, PanelHandle, PanelReconciler, PanelRecord, PanelTransition,
};
pub use session::MatchSession;
