//! Shared types for HERALD: announcement priorities, panel classification,
//! detector identity, and the narrator configuration. These are consumed by
//! both the core engine and host-side adapters, so they live in their own
//! crate with serde derives and nothing heavier.

use serde::{Deserialize, Serialize};

/// Urgency class attached to every announcement.
///
/// Ordering matters: the duplicate filter only suppresses announcements
/// below `High`, and consumers may use priority to interrupt in-progress
/// speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Ambient detail (phase steps, targeting prompts).
    Low,
    /// Routine game flow (zone movement, reveals).
    Normal,
    /// Player-impacting changes (turns, damage, life totals).
    High,
    /// Game-deciding. Never suppressed.
    Immediate,
}

/// Which detection source claims a panel family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorKind {
    /// Event-driven show/hide interception.
    PatchHook,
    /// Per-tick read of an open/closed property.
    ReflectionPoll,
    /// Per-tick fade-group opacity sampling.
    AlphaPoll,
}

/// Broad panel category derived from the panel's canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelType {
    Popup,
    Settings,
    Social,
    Blade,
    Overlay,
    /// Fallback for anything unrecognized.
    Content,
}

impl PanelType {
    /// Stacking weight used to pick the frontmost panel. Higher wins.
    pub fn stack_priority(self) -> u32 {
        match self {
            PanelType::Popup => 1000,
            PanelType::Settings => 500,
            PanelType::Social => 400,
            PanelType::Blade => 300,
            PanelType::Overlay => 200,
            PanelType::Content => 100,
        }
    }

    /// Whether a visible panel of this type should restrict navigation
    /// to its own contents. Blades are full-width content surfaces, so
    /// they do not filter; neither does generic content.
    pub fn filters_navigation(self) -> bool {
        match self {
            PanelType::Popup | PanelType::Settings | PanelType::Social | PanelType::Overlay => true,
            PanelType::Blade | PanelType::Content => false,
        }
    }
}

/// User-tunable narrator settings, persisted as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarratorConfig {
    /// Window within which an identical low/normal-priority announcement
    /// is suppressed, in milliseconds.
    pub duplicate_window_ms: u64,
    /// How many ticks between stale-reference sweeps of tracked panels.
    pub validation_interval_ticks: u32,
    /// Log events that classify as Ignored (trace level, noisy).
    pub log_ignored_events: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            duplicate_window_ms: 500,
            validation_interval_ticks: 30,
            log_ignored_events: false,
        }
    }
}
