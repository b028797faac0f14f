//! Per-kind announcement text builders.
//!
//! `build` turns a classified event into at most one short announcement,
//! mutating the session's zone counters and spell timestamps along the
//! way. Silence is a deliberate output: first observations, unchanged
//! counts, routine mana, and most phase steps produce nothing. A missing
//! required field never escapes as an error; the builder logs at debug
//! and returns no announcement.

use chrono::NaiveDateTime;
use herald_types::Priority;

use crate::error::HeraldError;
use crate::events::{EventFields, EventKind, field, kind_name};
use crate::session::{MatchSession, Ownership, Zone, ZoneDelta};

/// Build the announcement for one classified event.
///
/// Returns `None` both for deliberately-silent paths and for malformed
/// events; the latter are logged. `now` stamps the spell-timing marks.
pub fn build(
    kind: EventKind,
    event: &dyn EventFields,
    session: &mut MatchSession,
    now: NaiveDateTime,
) -> Option<String> {
    let result = match kind {
        EventKind::TurnChange => turn_change(event, session),
        EventKind::PhaseChange => Ok(phase_change(event)),
        EventKind::ZoneTransfer => zone_transfer(event, session, now),
        EventKind::LifeChange => life_change(event, session),
        EventKind::DamageDealt => damage_dealt(event),
        EventKind::ManaProduced => Ok(None),
        EventKind::CardRevealed => Ok(card_revealed(event)),
        EventKind::CountersChanged => counters_changed(event),
        EventKind::GameEnd => game_end(event, session),
        EventKind::Combat => Ok(combat(event)),
        // Targeting kinds are routed to the TargetingMode collaborator
        // before the builder runs.
        EventKind::TargetSelection | EventKind::TargetConfirmed | EventKind::Ignored => Ok(None),
    };

    match result {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!("[ANNOUNCE] Dropping malformed event: {err}");
            None
        }
    }
}

/// Fixed priority table for text-producing kinds.
pub fn priority_for(kind: EventKind) -> Priority {
    match kind {
        EventKind::GameEnd => Priority::Immediate,
        EventKind::TurnChange | EventKind::DamageDealt | EventKind::LifeChange => Priority::High,
        EventKind::ZoneTransfer | EventKind::CardRevealed => Priority::Normal,
        _ => Priority::Low,
    }
}

// --- Field Extraction ---

fn require_int(event: &dyn EventFields, name: &'static str) -> Result<i64, HeraldError> {
    event.get_int(name).ok_or_else(|| HeraldError::MalformedEvent {
        kind: event.kind_name().to_string(),
        field: name,
    })
}

fn require_str<'a>(
    event: &'a dyn EventFields,
    name: &'static str,
) -> Result<&'a str, HeraldError> {
    event.get_str(name).ok_or_else(|| HeraldError::MalformedEvent {
        kind: event.kind_name().to_string(),
        field: name,
    })
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    let n = count.abs();
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

// --- Per-Kind Builders ---

fn turn_change(
    event: &dyn EventFields,
    session: &MatchSession,
) -> Result<Option<String>, HeraldError> {
    let active_seat = require_int(event, field::ACTIVE_SEAT_ID)?;
    let whose = if session.is_local_seat(active_seat) {
        "Your turn"
    } else {
        "Opponent's turn"
    };
    // Turn number is optional; omit the clause when absent.
    Ok(Some(match event.get_int(field::TURN_NUMBER) {
        Some(n) => format!("Turn {n}. {whose}"),
        None => whose.to_string(),
    }))
}

fn phase_change(event: &dyn EventFields) -> Option<String> {
    let phase = event.get_str(field::PHASE)?;
    let step = event.get_str(field::STEP).unwrap_or("None");

    // Allow-list. Beginning-phase steps and cleanup stay silent.
    let text = match (phase, step) {
        ("Main1", _) => "First main phase",
        ("Main2", _) => "Second main phase",
        ("Combat", "DeclareAttack") => "Declare attackers",
        ("Combat", "DeclareBlock") => "Declare blockers",
        ("Combat", "CombatDamage") => "Combat damage",
        ("Combat", "EndCombat") => "End of combat",
        ("Combat", "None") => "Combat phase",
        ("Ending", "End") => "End step",
        _ => return None,
    };
    Some(text.to_string())
}

fn zone_transfer(
    event: &dyn EventFields,
    session: &mut MatchSession,
    now: NaiveDateTime,
) -> Result<Option<String>, HeraldError> {
    if event.kind_name() == kind_name::ZONE_TRANSFER_GROUP {
        // Multi-pair transfer groups are observed but never translated.
        tracing::debug!("[ANNOUNCE] Zone transfer group received, not narrated");
        return Ok(None);
    }

    let zone = Zone::from_name(require_str(event, field::ZONE)?);
    let owner_seat = require_int(event, field::OWNER_SEAT_ID)?;
    let count = require_int(event, field::COUNT)?;
    let owner = session.ownership_of(owner_seat);

    let diff = match session.observe_zone_count(zone, owner, count) {
        ZoneDelta::Baseline | ZoneDelta::Unchanged => return Ok(None),
        ZoneDelta::Changed(diff) => diff,
    };

    let text = match (zone, owner) {
        (Zone::Hand, Ownership::Local) if diff > 0 => {
            Some(format!("Drew {}", plural(diff, "card", "cards")))
        }
        (Zone::Hand, Ownership::Opponent) if diff > 0 => {
            Some(format!("Opponent drew {}", plural(diff, "card", "cards")))
        }
        (Zone::Hand, Ownership::Opponent) => Some("Opponent played a card".to_string()),
        // The local player already knows what left their hand.
        (Zone::Hand, Ownership::Local) => None,

        (Zone::Battlefield, Ownership::Opponent) if diff > 0 => Some(format!(
            "Opponent: {} entered battlefield",
            plural(diff, "permanent", "permanents")
        )),
        (Zone::Battlefield, Ownership::Local) if diff > 0 => {
            session.mark_spell_resolved(now);
            None
        }
        (Zone::Battlefield, Ownership::Opponent) => Some(format!(
            "Opponent lost {}",
            plural(diff, "permanent", "permanents")
        )),
        (Zone::Battlefield, Ownership::Local) => Some(format!(
            "{} of your permanents left battlefield",
            diff.abs()
        )),

        (Zone::Graveyard, Ownership::Opponent) if diff > 0 => {
            Some("Card went to opponent's graveyard".to_string())
        }
        (Zone::Graveyard, Ownership::Local) if diff > 0 => {
            Some("Card went to your graveyard".to_string())
        }

        (Zone::Stack, Ownership::Opponent) if diff > 0 => {
            Some("Opponent cast a spell".to_string())
        }
        (Zone::Stack, Ownership::Local) if diff > 0 => {
            session.mark_spell_cast(now);
            None
        }
        (Zone::Stack, _) => {
            session.mark_spell_resolved(now);
            Some("Spell resolved".to_string())
        }

        (Zone::Exile, _) if diff > 0 => Some("Card exiled".to_string()),

        // Remaining zones and directions are deliberately silent.
        _ => None,
    };
    Ok(text)
}

fn life_change(
    event: &dyn EventFields,
    session: &MatchSession,
) -> Result<Option<String>, HeraldError> {
    let seat = require_int(event, field::SEAT_ID)?;
    let delta = require_int(event, field::DELTA)?;
    let total = require_int(event, field::LIFE_TOTAL)?;
    if delta == 0 {
        return Ok(None);
    }

    let who = match session.ownership_of(seat) {
        Ownership::Local => "You",
        Ownership::Opponent => "Opponent",
    };
    let verb = if delta > 0 { "gained" } else { "lost" };
    Ok(Some(format!(
        "{who} {verb} {} life. Now at {total}",
        delta.abs()
    )))
}

fn damage_dealt(event: &dyn EventFields) -> Result<Option<String>, HeraldError> {
    let amount = require_int(event, field::AMOUNT)?;
    if amount <= 0 {
        return Ok(None);
    }
    // No resolvable target, no announcement.
    let Some(target) = event.get_str(field::TARGET_NAME) else {
        return Ok(None);
    };
    Ok(Some(format!("{amount} damage to {target}")))
}

fn card_revealed(event: &dyn EventFields) -> Option<String> {
    // Reveals are public information; announce whenever the card is
    // resolvable, regardless of owner.
    let name = event.get_str(field::CARD_NAME)?;
    Some(format!("Revealed {name}"))
}

fn counters_changed(event: &dyn EventFields) -> Result<Option<String>, HeraldError> {
    let change = require_int(event, field::CHANGE)?;
    let counter_type = require_str(event, field::COUNTER_TYPE)?;
    if change == 0 {
        return Ok(None);
    }

    let target = event.get_str(field::TARGET_NAME).unwrap_or("creature");
    let verb = if change > 0 { "gained" } else { "lost" };
    let n = change.abs();
    let noun = if n == 1 { "counter" } else { "counters" };
    Ok(Some(format!("{target} {verb} {n} {counter_type} {noun}")))
}

fn game_end(
    event: &dyn EventFields,
    session: &MatchSession,
) -> Result<Option<String>, HeraldError> {
    let winner = require_int(event, field::WINNING_SEAT_ID)?;
    Ok(Some(if session.is_local_seat(winner) {
        "Victory!".to_string()
    } else {
        "Defeat".to_string()
    }))
}

fn combat(event: &dyn EventFields) -> Option<String> {
    let text = match event.kind_name() {
        kind_name::COMBAT_BEGUN => "Combat begins",
        kind_name::ATTACKER_DECLARED => "Attacker declared",
        kind_name::ATTACKER_REMOVED => "Attacker removed",
        // Blocker declarations and any other combat sub-events are silent.
        _ => return None,
    };
    Some(text.to_string())
}
