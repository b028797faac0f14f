//! Event classification.
//!
//! Every delivered event is mapped from its kind name into the closed
//! [`EventKind`] taxonomy by a static table lookup. Unmapped kinds
//! classify as [`EventKind::Ignored`]; the stream contains far more event
//! types than the narrator cares about, so unknown names are normal and
//! never an error.

use phf::phf_map;

use crate::events::EventFields;

/// Kind names that need individual dispatch past classification.
pub mod kind_name {
    pub const ZONE_COUNT_CHANGED: &str = "ZoneCountChangedEvent";
    pub const ZONE_TRANSFER_GROUP: &str = "ZoneTransferGroupEvent";
    pub const COMBAT_BEGUN: &str = "CombatBegunEvent";
    pub const ATTACKER_DECLARED: &str = "AttackerDeclaredEvent";
    pub const ATTACKER_REMOVED: &str = "AttackerRemovedEvent";
    pub const BLOCKER_DECLARED: &str = "BlockerDeclaredEvent";
}

/// Closed taxonomy of narratable events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TurnChange,
    PhaseChange,
    ZoneTransfer,
    LifeChange,
    DamageDealt,
    ManaProduced,
    CardRevealed,
    CountersChanged,
    GameEnd,
    Combat,
    TargetSelection,
    TargetConfirmed,
    /// Everything the narrator does not announce.
    Ignored,
}

static KIND_TABLE: phf::Map<&'static str, EventKind> = phf_map! {
    "TurnChangedEvent" => EventKind::TurnChange,
    "PhaseChangedEvent" => EventKind::PhaseChange,
    "ZoneCountChangedEvent" => EventKind::ZoneTransfer,
    "ZoneTransferGroupEvent" => EventKind::ZoneTransfer,
    "LifeTotalChangedEvent" => EventKind::LifeChange,
    "DamageDealtEvent" => EventKind::DamageDealt,
    "ManaProducedEvent" => EventKind::ManaProduced,
    "CardRevealedEvent" => EventKind::CardRevealed,
    "CountersChangedEvent" => EventKind::CountersChanged,
    "GameEndEvent" => EventKind::GameEnd,
    "CombatBegunEvent" => EventKind::Combat,
    "AttackerDeclaredEvent" => EventKind::Combat,
    "AttackerRemovedEvent" => EventKind::Combat,
    "BlockerDeclaredEvent" => EventKind::Combat,
    "SelectTargetsEvent" => EventKind::TargetSelection,
    "TargetsConfirmedEvent" => EventKind::TargetConfirmed,
};

/// Classify a delivered event by its kind name. Fail-open: anything the
/// table does not know is `Ignored`.
pub fn classify(event: &dyn EventFields) -> EventKind {
    KIND_TABLE
        .get(event.kind_name())
        .copied()
        .unwrap_or(EventKind::Ignored)
}
