//! Squad chemistry computation.
//!
//! `compute_chemistry` is a pure function of (placement, formation). It
//! runs two passes over the formation's slots in declared order:
//!
//! 1. Tally club/nation/league group sizes across in-position cards only.
//!    Out-of-position cards contribute to nothing.
//! 2. Score each placed card from the completed tallies: group size maps
//!    to a 0..3 contribution per dimension via tiered thresholds, the
//!    three contributions sum, and the sum is capped at 3. Out-of-position
//!    cards score 0.
//!
//! The team total is the sum of per-card scores, capped at 33. Results are
//! always recomputed from scratch; nothing is cached between calls, so a
//! formation switch (which can flip in-position status for a retained
//! card) can never leak stale state.

pub mod placement;

use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

use crate::error::{ChemError, Result};
use crate::formation::{Formation, FormationSlot};
use crate::models::{Card, GroupKey};

pub use placement::Placement;

/// A single card never exceeds 3 chemistry.
pub const MAX_CARD_CHEM: u8 = 3;
/// A full squad never exceeds 33 chemistry.
pub const MAX_TEAM_CHEM: u8 = 33;

/// Per-card and team chemistry for one placement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChemistryResult {
    /// Card id → chemistry in 0..=3.
    pub per_card_chem: BTreeMap<String, u8>,
    /// Team chemistry in 0..=33.
    pub team_chem: u8,
}

impl ChemistryResult {
    pub fn empty() -> Self {
        Self { per_card_chem: BTreeMap::new(), team_chem: 0 }
    }
}

/// Completed pass-1 tallies. Pass 2 takes this by reference, which makes
/// the "pass 1 must fully finish first" ordering a data dependency.
#[derive(Debug, Default)]
struct GroupTally {
    club: HashMap<GroupKey, u32>,
    nation: HashMap<GroupKey, u32>,
    league: HashMap<GroupKey, u32>,
}

impl GroupTally {
    fn add(&mut self, card: &Card) {
        if let Some(key) = card.club_key() {
            *self.club.entry(key).or_insert(0) += 1;
        }
        if let Some(key) = card.nation_key() {
            *self.nation.entry(key).or_insert(0) += 1;
        }
        if let Some(key) = card.league_key() {
            *self.league.entry(key).or_insert(0) += 1;
        }
    }

    fn club_size(&self, card: &Card) -> u32 {
        card.club_key().and_then(|k| self.club.get(&k).copied()).unwrap_or(0)
    }

    fn nation_size(&self, card: &Card) -> u32 {
        card.nation_key().and_then(|k| self.nation.get(&k).copied()).unwrap_or(0)
    }

    fn league_size(&self, card: &Card) -> u32 {
        card.league_key().and_then(|k| self.league.get(&k).copied()).unwrap_or(0)
    }
}

/// Shared-club contribution: 2+ → 1, 4+ → 2, 7+ → 3.
fn club_contribution(size: u32) -> u8 {
    match size {
        s if s >= 7 => 3,
        s if s >= 4 => 2,
        s if s >= 2 => 1,
        _ => 0,
    }
}

/// Shared-nation contribution: 2+ → 1, 5+ → 2, 8+ → 3.
fn nation_contribution(size: u32) -> u8 {
    match size {
        s if s >= 8 => 3,
        s if s >= 5 => 2,
        s if s >= 2 => 1,
        _ => 0,
    }
}

/// Shared-league contribution: 3+ → 1, 5+ → 2, 8+ → 3.
fn league_contribution(size: u32) -> u8 {
    match size {
        s if s >= 8 => 3,
        s if s >= 5 => 2,
        s if s >= 3 => 1,
        _ => 0,
    }
}

fn in_position(card: &Card, slot: &FormationSlot) -> bool {
    card.canonical_positions().iter().any(|p| p.can_fill(slot.pos))
}

/// Structural precondition checks: exact key-set match between placement
/// and formation, unique slot keys, unique placed card ids. The original
/// squad builder left these as undefined behavior; here they fail fast.
fn validate(placement: &Placement, formation: &Formation) -> Result<()> {
    formation.validate()?;
    placement.validate_against(formation)?;

    let mut seen = HashSet::new();
    for slot in &formation.slots {
        if let Some(card) = placement.get(&slot.key) {
            if !seen.insert(card.id.as_str()) {
                return Err(ChemError::DuplicateCardId { card_id: card.id.clone() });
            }
        }
    }
    Ok(())
}

/// Pass 1: group-membership tallies over in-position cards only.
fn tally_groups(placement: &Placement, formation: &Formation) -> GroupTally {
    let mut tally = GroupTally::default();
    for slot in &formation.slots {
        if let Some(card) = placement.get(&slot.key) {
            if in_position(card, slot) {
                tally.add(card);
            } else {
                trace!(slot = %slot.key, card = %card.id, "out of position, excluded from tallies");
            }
        }
    }
    tally
}

/// Compute per-card and team chemistry for a placement on a formation.
///
/// Pure and idempotent: identical arguments always yield identical
/// results. Unrecognized position labels degrade to out-of-position
/// (score 0); only structural precondition violations return errors.
pub fn compute_chemistry(placement: &Placement, formation: &Formation) -> Result<ChemistryResult> {
    validate(placement, formation)?;

    let tally = tally_groups(placement, formation);

    let mut per_card_chem = BTreeMap::new();
    let mut team_total: u32 = 0;

    for slot in &formation.slots {
        let card = match placement.get(&slot.key) {
            Some(card) => card,
            None => continue,
        };

        let chem = if in_position(card, slot) {
            let club = club_contribution(tally.club_size(card));
            let nation = nation_contribution(tally.nation_size(card));
            let league = league_contribution(tally.league_size(card));
            (club + nation + league).min(MAX_CARD_CHEM)
        } else {
            0
        };

        trace!(slot = %slot.key, card = %card.id, chem, "scored card");
        per_card_chem.insert(card.id.clone(), chem);
        team_total += u32::from(chem);
    }

    let team_chem = team_total.min(u32::from(MAX_TEAM_CHEM)) as u8;
    debug!(
        formation = %formation.name,
        cards = per_card_chem.len(),
        team_chem,
        "chemistry computed"
    );

    Ok(ChemistryResult { per_card_chem, team_chem })
}
