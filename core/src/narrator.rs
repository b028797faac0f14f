//! Engine facade.
//!
//! `Narrator` wires the classifier, builders, duplicate filter, panel
//! sources, and reconciler behind the host boundary. The host calls
//! `deliver` per observed event in arrival order, `tick` once per frame
//! with the current panel handles, and drains `take_announcements` /
//! `take_panel_transitions` afterwards. Per-tick processing order is
//! fixed: reflection poll, alpha poll, then the periodic stale sweep, so
//! consumers never read a partially reconciled set.

use chrono::NaiveDateTime;
use herald_types::{NarratorConfig, Priority};

use crate::announce::{Announcement, DuplicateFilter, build, priority_for};
use crate::events::{EventFields, EventKind, classify};
use crate::panels::{
    AlphaPollSource, HandleRef, PanelReconciler, PanelRecord, PanelTransition, PatchHookSource,
    ReflectionPollSource,
};
use crate::session::MatchSession;

/// External target-selection UI collaborator.
pub trait TargetingMode {
    fn begin_targeting(&mut self, event: &dyn EventFields);
    fn end_targeting(&mut self, event: &dyn EventFields);
}

/// The narration engine.
pub struct Narrator {
    config: NarratorConfig,
    session: MatchSession,
    filter: DuplicateFilter,
    patch_hook: PatchHookSource,
    reflection: ReflectionPollSource,
    alpha: AlphaPollSource,
    reconciler: PanelReconciler,
    targeting: Option<Box<dyn TargetingMode>>,
    pending: Vec<Announcement>,
    tick_count: u32,
    active: bool,
}

impl Narrator {
    pub fn new(config: NarratorConfig) -> Self {
        let filter = DuplicateFilter::new(config.duplicate_window_ms);
        Self {
            config,
            session: MatchSession::new(),
            filter,
            patch_hook: PatchHookSource::new(),
            reflection: ReflectionPollSource::new(),
            alpha: AlphaPollSource::new(),
            reconciler: PanelReconciler::new(),
            targeting: None,
            pending: Vec::new(),
            tick_count: 0,
            active: false,
        }
    }

    // --- Session Lifecycle ---

    /// Begin a match for the given local seat. All prior session state is
    /// discarded first.
    pub fn activate(&mut self, local_seat: i64) {
        self.reset_detectors();
        self.session.activate(local_seat);
        self.active = true;
        tracing::info!("[NARRATOR] Session activated, local seat {local_seat}");
    }

    /// End the match. Events delivered while inactive are dropped.
    pub fn deactivate(&mut self) {
        self.reset_detectors();
        self.active = false;
        tracing::info!("[NARRATOR] Session deactivated");
    }

    /// Clear all session-scoped state: counters, filter record, detector
    /// state, tracked panels, queued outputs.
    pub fn reset_detectors(&mut self) {
        self.session.reset();
        self.filter.reset();
        self.reflection.reset();
        self.alpha.reset();
        self.reconciler.reset();
        self.pending.clear();
        self.tick_count = 0;
    }

    // --- Event Delivery ---

    /// Deliver one host event, stamped with the current local time.
    pub fn deliver(&mut self, event: &dyn EventFields) {
        self.deliver_at(event, chrono::Local::now().naive_local());
    }

    /// Deliver one host event at an explicit timestamp.
    pub fn deliver_at(&mut self, event: &dyn EventFields, now: NaiveDateTime) {
        if !self.active {
            return;
        }

        let kind = classify(event);
        match kind {
            EventKind::Ignored => {
                if self.config.log_ignored_events {
                    tracing::trace!("[CLASSIFY] Ignored event: {}", event.kind_name());
                }
            }
            EventKind::TargetSelection => match self.targeting.as_mut() {
                Some(mode) => mode.begin_targeting(event),
                // No targeting UI available, fall back to a plain prompt.
                None => self.push("Select a target".to_string(), Priority::Low, now),
            },
            EventKind::TargetConfirmed => {
                if let Some(mode) = self.targeting.as_mut() {
                    mode.end_targeting(event);
                }
            }
            _ => {
                if let Some(text) = build(kind, event, &mut self.session, now) {
                    self.push(text, priority_for(kind), now);
                }
            }
        }
    }

    fn push(&mut self, text: String, priority: Priority, now: NaiveDateTime) {
        if let Some(announcement) = self.filter.admit(text, priority, now) {
            tracing::debug!(
                "[ANNOUNCE] {:?}: {}",
                announcement.priority,
                announcement.text
            );
            self.pending.push(announcement);
        }
    }

    // --- Panel Tracking ---

    /// Run one detection tick over the currently known panel handles.
    pub fn tick(&mut self, panels: &[HandleRef]) {
        if !self.active {
            return;
        }

        self.reflection.poll(panels, &mut self.reconciler);
        self.alpha.poll(panels, &mut self.reconciler);

        self.tick_count = self.tick_count.wrapping_add(1);
        let interval = self.config.validation_interval_ticks.max(1);
        if self.tick_count % interval == 0 {
            self.reconciler.validate();
        }
    }

    /// Patch-hook tap: the host's show method fired.
    pub fn panel_shown(&mut self, handle: &HandleRef) {
        if !self.active {
            return;
        }
        self.patch_hook.panel_shown(handle, &mut self.reconciler);
    }

    /// Patch-hook tap: the host's hide method fired.
    pub fn panel_hidden_by_name(&mut self, name: &str) {
        if !self.active {
            return;
        }
        self.patch_hook
            .panel_hidden_by_name(name, &mut self.reconciler);
    }

    // --- Output Drains ---

    /// Take all announcements queued since the last drain, in emission
    /// order.
    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.pending)
    }

    /// Take all panel open/close transitions queued since the last drain.
    pub fn take_panel_transitions(&mut self) -> Vec<PanelTransition> {
        self.reconciler.take_transitions()
    }

    // --- Accessors ---

    pub fn set_targeting_mode(&mut self, mode: Box<dyn TargetingMode>) {
        self.targeting = Some(mode);
    }

    pub fn frontmost_panel(&self) -> Option<&PanelRecord> {
        self.reconciler.frontmost()
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(NarratorConfig::default())
    }
}
