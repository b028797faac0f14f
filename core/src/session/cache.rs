//! Match-scoped mutable state.
//!
//! One `MatchSession` lives for one duel: zone counts keyed by zone and
//! ownership, the local seat identity, and the last-spell timestamps the
//! zone builders maintain. Pure storage; routing logic lives in the
//! Narrator.

use chrono::NaiveDateTime;
use hashbrown::HashMap;

/// Card zones the narrator distinguishes. Anything unrecognized folds
/// into `Other` and is never announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Hand,
    Battlefield,
    Graveyard,
    Stack,
    Exile,
    Library,
    Other,
}

impl Zone {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "hand" => Zone::Hand,
            "battlefield" => Zone::Battlefield,
            "graveyard" => Zone::Graveyard,
            "stack" => Zone::Stack,
            "exile" => Zone::Exile,
            "library" => Zone::Library,
            _ => Zone::Other,
        }
    }
}

/// Whose zone a count refers to, relative to the local seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    Local,
    Opponent,
}

/// Outcome of folding one zone-count snapshot into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneDelta {
    /// First observation for this key. Count recorded, nothing to compare.
    Baseline,
    /// Count equals the stored value.
    Unchanged,
    /// Count moved by this signed difference.
    Changed(i64),
}

/// Pure storage for one match's narration state.
/// Routing logic lives in the Narrator.
#[derive(Debug, Clone, Default)]
pub struct MatchSession {
    local_seat: Option<i64>,
    zone_counts: HashMap<(Zone, Ownership), i64>,
    pub last_spell_cast: Option<NaiveDateTime>,
    pub last_spell_resolved: Option<NaiveDateTime>,
}

impl MatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Session Lifecycle ---

    /// Begin a match for the given local seat. Clears all prior state.
    pub fn activate(&mut self, local_seat: i64) {
        self.reset();
        self.local_seat = Some(local_seat);
    }

    /// Clear all match-scoped state, including seat identity.
    pub fn reset(&mut self) {
        self.local_seat = None;
        self.zone_counts.clear();
        self.last_spell_cast = None;
        self.last_spell_resolved = None;
    }

    // --- Accessors ---

    pub fn local_seat(&self) -> Option<i64> {
        self.local_seat
    }

    pub fn is_local_seat(&self, seat: i64) -> bool {
        self.local_seat == Some(seat)
    }

    /// Classify a seat relative to the local player. Until `activate` has
    /// run, every seat reads as `Opponent`.
    pub fn ownership_of(&self, seat: i64) -> Ownership {
        if self.is_local_seat(seat) {
            Ownership::Local
        } else {
            Ownership::Opponent
        }
    }

    pub fn zone_count(&self, zone: Zone, owner: Ownership) -> Option<i64> {
        self.zone_counts.get(&(zone, owner)).copied()
    }

    // --- Zone Counters ---

    /// Fold a zone-count snapshot into the stored counters.
    ///
    /// A key never seen before records the count as baseline; absence is
    /// not zero, so no delta is derived from a first observation. The
    /// stored count always ends up equal to the snapshot.
    pub fn observe_zone_count(&mut self, zone: Zone, owner: Ownership, count: i64) -> ZoneDelta {
        match self.zone_counts.insert((zone, owner), count) {
            None => ZoneDelta::Baseline,
            Some(previous) if previous == count => ZoneDelta::Unchanged,
            Some(previous) => ZoneDelta::Changed(count - previous),
        }
    }

    // --- Spell Timing ---

    pub fn mark_spell_cast(&mut self, at: NaiveDateTime) {
        self.last_spell_cast = Some(at);
    }

    pub fn mark_spell_resolved(&mut self, at: NaiveDateTime) {
        self.last_spell_resolved = Some(at);
    }
}
