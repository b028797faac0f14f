//! Panel state reconciliation.
//!
//! The reconciler owns the authoritative set of visible panels. Per
//! instance the state machine is Unseen → Visible → Closed: an open
//! report from the owning detector creates a record, a close report from
//! that detector (or a stale-reference sweep) retires it. A panel whose
//! underlying object dies while tracked still gets exactly one
//! synthesized close with its last-known name; consumers waiting on a
//! close must never be left hanging.

use hashbrown::HashMap;
use herald_types::DetectorKind;

use crate::error::HeraldError;
use crate::panels::ownership::handles_panel;
use crate::panels::record::{PanelId, PanelRecord};
use crate::panels::sources::HandleRef;

/// One change to the visible-panel set, drained by the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelTransition {
    Opened(PanelRecord),
    Closed { id: PanelId, name: String },
}

#[derive(Debug)]
struct TrackedPanel {
    record: PanelRecord,
    handle: HandleRef,
}

/// Authoritative visible-panel set.
#[derive(Debug, Default)]
pub struct PanelReconciler {
    visible: HashMap<PanelId, TrackedPanel>,
    transitions: Vec<PanelTransition>,
}

impl PanelReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Signal Intake ---

    /// A detector reports a panel open.
    ///
    /// The ownership partition is re-checked here so a mis-routed signal
    /// from a non-owning detector can never create a record. A second
    /// open for an already-visible identity is ignored; at most one
    /// Visible record exists per identity.
    pub fn report_open(
        &mut self,
        id: PanelId,
        name: &str,
        detector: DetectorKind,
        handle: HandleRef,
    ) {
        if !handles_panel(detector, name) {
            tracing::warn!(
                "[PANEL-STATE] Rejected open of '{name}' from non-owning detector {detector:?}"
            );
            return;
        }
        if self.visible.contains_key(&id) {
            return;
        }

        let record = PanelRecord::new(id, name, detector);
        tracing::info!(
            "[PANEL-STATE] Panel opened: '{}' ({:?}, via {detector:?})",
            record.display_name,
            record.panel_type
        );
        self.transitions.push(PanelTransition::Opened(record.clone()));
        self.visible.insert(id, TrackedPanel { record, handle });
    }

    /// The owning detector reports a close for a tracked identity.
    pub fn report_close_by_id(&mut self, id: PanelId, detector: DetectorKind) {
        let Some(tracked) = self.visible.get(&id) else {
            return;
        };
        if tracked.record.detected_by != detector {
            tracing::warn!(
                "[PANEL-STATE] Rejected close of '{}' from non-owning detector {detector:?}",
                tracked.record.canonical_name
            );
            return;
        }
        self.close(id);
    }

    /// Close by canonical name, for hooks that only see a name. Same
    /// owning-detector rule as closing by identity.
    pub fn report_close_by_name(&mut self, name: &str, detector: DetectorKind) {
        let id = self.visible.iter().find_map(|(id, tracked)| {
            (tracked.record.canonical_name.eq_ignore_ascii_case(name)
                && tracked.record.detected_by == detector)
                .then_some(*id)
        });
        if let Some(id) = id {
            self.close(id);
        }
    }

    fn close(&mut self, id: PanelId) {
        if let Some(tracked) = self.visible.remove(&id) {
            tracing::info!(
                "[PANEL-STATE] Panel closed: '{}'",
                tracked.record.display_name
            );
            self.transitions.push(PanelTransition::Closed {
                id,
                name: tracked.record.canonical_name,
            });
        }
    }

    // --- Stale Sweep ---

    /// Drop tracked panels whose underlying object died, synthesizing one
    /// close each with the last-known name.
    pub fn validate(&mut self) {
        let stale: Vec<PanelId> = self
            .visible
            .iter()
            .filter(|(_, tracked)| !tracked.handle.is_alive())
            .map(|(id, _)| *id)
            .collect();

        for id in stale {
            if let Some(tracked) = self.visible.remove(&id) {
                let err = HeraldError::StaleReference {
                    name: tracked.record.canonical_name.clone(),
                };
                tracing::warn!("[PANEL-STATE] {err}, synthesizing close");
                self.transitions.push(PanelTransition::Closed {
                    id,
                    name: tracked.record.canonical_name,
                });
            }
        }
    }

    // --- Consumer View ---

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.visible.contains_key(&id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &PanelRecord> {
        self.visible.values().map(|tracked| &tracked.record)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The panel consumers should treat as frontmost, by stacking
    /// priority.
    pub fn frontmost(&self) -> Option<&PanelRecord> {
        self.visible()
            .max_by_key(|record| record.stack_priority())
    }

    /// Drain queued open/close transitions in emission order.
    pub fn take_transitions(&mut self) -> Vec<PanelTransition> {
        std::mem::take(&mut self.transitions)
    }

    /// Drop all tracked panels and queued transitions without emitting
    /// closes. Session boundaries discard state rather than narrate it.
    pub fn reset(&mut self) {
        self.visible.clear();
        self.transitions.clear();
    }
}
