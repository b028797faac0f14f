//! The three panel-detection sources.
//!
//! Each source turns raw host observations into open/close reports for
//! the reconciler, but only for names its ownership patterns claim. The
//! patch-hook source is event-driven; the other two are polled from the
//! engine tick.

use std::rc::Rc;

use hashbrown::{HashMap, HashSet};
use herald_types::DetectorKind;

use crate::panels::ownership::handles_panel;
use crate::panels::reconciler::PanelReconciler;
use crate::panels::record::PanelId;

/// Alpha at or above which a fading panel counts as shown.
pub const ALPHA_VISIBLE_THRESHOLD: f32 = 0.99;
/// Alpha at or below which a fading panel counts as hidden.
pub const ALPHA_HIDDEN_THRESHOLD: f32 = 0.01;

/// Host-side view of one live panel object.
///
/// The adapter implements this per panel; the engine never touches host
/// objects directly. `is_alive` goes false once the underlying object is
/// destroyed, at which point every other accessor may return defaults.
pub trait PanelHandle: std::fmt::Debug {
    /// Stable identity of the underlying object.
    fn id(&self) -> PanelId;
    /// Canonical prefab/controller name.
    fn name(&self) -> &str;
    fn is_alive(&self) -> bool;
    /// Host-side active flag; inactive handles are not polled.
    fn is_active(&self) -> bool;

    /// Reflective open/closed property, for families that expose one.
    fn is_open(&self) -> Option<bool> {
        None
    }

    /// The panel's own fade-group opacity.
    fn own_alpha(&self) -> Option<f32> {
        None
    }

    /// Minimum opacity across ancestor fade groups.
    fn ancestor_min_alpha(&self) -> Option<f32> {
        None
    }
}

pub type HandleRef = Rc<dyn PanelHandle>;

/// Opacity after accounting for ancestors: any ancestor at or below the
/// hidden threshold forces the result to 0 no matter the panel's own
/// value.
pub fn effective_alpha(handle: &dyn PanelHandle) -> Option<f32> {
    let own = handle.own_alpha()?;
    match handle.ancestor_min_alpha() {
        Some(ancestor) if ancestor <= ALPHA_HIDDEN_THRESHOLD => Some(0.0),
        _ => Some(own),
    }
}

// ─── Patch-Hook Source ───────────────────────────────────────────────────

/// Event-driven source fed by the host's method-interception layer.
#[derive(Debug, Default)]
pub struct PatchHookSource;

impl PatchHookSource {
    pub fn new() -> Self {
        Self
    }

    /// The host's show method fired for this panel.
    pub fn panel_shown(&self, handle: &HandleRef, reconciler: &mut PanelReconciler) {
        if !handles_panel(DetectorKind::PatchHook, handle.name()) {
            return;
        }
        reconciler.report_open(
            handle.id(),
            handle.name(),
            DetectorKind::PatchHook,
            Rc::clone(handle),
        );
    }

    /// The host's hide method fired; only a name is available.
    pub fn panel_hidden_by_name(&self, name: &str, reconciler: &mut PanelReconciler) {
        if !handles_panel(DetectorKind::PatchHook, name) {
            return;
        }
        reconciler.report_close_by_name(name, DetectorKind::PatchHook);
    }
}

// ─── Reflective-Poll Source ──────────────────────────────────────────────

/// Polls an open/closed property and reports only on change.
#[derive(Debug, Default)]
pub struct ReflectionPollSource {
    last_open: HashMap<PanelId, bool>,
}

impl ReflectionPollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, handles: &[HandleRef], reconciler: &mut PanelReconciler) {
        for handle in handles {
            if !handle.is_alive()
                || !handle.is_active()
                || !handles_panel(DetectorKind::ReflectionPoll, handle.name())
            {
                continue;
            }
            let Some(open) = handle.is_open() else {
                continue;
            };

            // A handle never polled before counts as closed, so a panel
            // that is already open on first sight reports immediately.
            let previous = self.last_open.insert(handle.id(), open).unwrap_or(false);
            if open == previous {
                continue;
            }
            if open {
                reconciler.report_open(
                    handle.id(),
                    handle.name(),
                    DetectorKind::ReflectionPoll,
                    Rc::clone(handle),
                );
            } else {
                reconciler.report_close_by_id(handle.id(), DetectorKind::ReflectionPoll);
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_open.clear();
    }
}

// ─── Alpha-Poll Source ───────────────────────────────────────────────────

/// Samples fade-group opacity with a hysteresis band.
///
/// "Opened" fires only when effective alpha crosses the visible threshold
/// from a not-visible state, "closed" only when it crosses the hidden
/// threshold from a visible state. Mid-fade samples change nothing.
/// Repeat opens for a name already seen this session are not re-reported.
#[derive(Debug, Default)]
pub struct AlphaPollSource {
    visible: HashMap<PanelId, bool>,
    seen_names: HashSet<String>,
}

impl AlphaPollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poll(&mut self, handles: &[HandleRef], reconciler: &mut PanelReconciler) {
        for handle in handles {
            if !handle.is_alive()
                || !handle.is_active()
                || !handles_panel(DetectorKind::AlphaPoll, handle.name())
            {
                continue;
            }
            let Some(alpha) = effective_alpha(handle.as_ref()) else {
                continue;
            };

            let was_visible = self.visible.get(&handle.id()).copied().unwrap_or(false);
            if !was_visible && alpha >= ALPHA_VISIBLE_THRESHOLD {
                self.visible.insert(handle.id(), true);
                if self.seen_names.insert(handle.name().to_string()) {
                    reconciler.report_open(
                        handle.id(),
                        handle.name(),
                        DetectorKind::AlphaPoll,
                        Rc::clone(handle),
                    );
                } else {
                    tracing::trace!(
                        "[PANEL-STATE] Alpha reopen of '{}' not re-reported",
                        handle.name()
                    );
                }
            } else if was_visible && alpha <= ALPHA_HIDDEN_THRESHOLD {
                self.visible.insert(handle.id(), false);
                reconciler.report_close_by_id(handle.id(), DetectorKind::AlphaPoll);
            }
        }
    }

    /// Clear per-instance visibility and the session seen-name set.
    pub fn reset(&mut self) {
        self.visible.clear();
        self.seen_names.clear();
    }
}
