//! Canonical position codes and the position resolver.
//!
//! Cards arrive from the marketplace API with free-text position labels
//! ("Right Back", "RIGHTBACK", "rb", ...). Everything downstream works on
//! the fixed set of 17 canonical codes, so all normalization happens here.
//! Resolution is lenient by policy: unrecognized input degrades to "no
//! canonical match", never to an error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Canonical position codes used by formation slots and normalized cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    RB,
    RWB,
    CB,
    LB,
    LWB,
    CDM,
    CM,
    CAM,
    RM,
    LM,
    RW,
    LW,
    RF,
    LF,
    CF,
    ST,
}

impl Position {
    /// All 17 canonical codes, in declaration order.
    pub const ALL: [Position; 17] = [
        Position::GK,
        Position::RB,
        Position::RWB,
        Position::CB,
        Position::LB,
        Position::LWB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::RM,
        Position::LM,
        Position::RW,
        Position::LW,
        Position::RF,
        Position::LF,
        Position::CF,
        Position::ST,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::RB => "RB",
            Position::RWB => "RWB",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::LWB => "LWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::RM => "RM",
            Position::LM => "LM",
            Position::RW => "RW",
            Position::LW => "LW",
            Position::RF => "RF",
            Position::LF => "LF",
            Position::CF => "CF",
            Position::ST => "ST",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            Position::RB | Position::RWB | Position::CB | Position::LB | Position::LWB
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::CDM | Position::CM | Position::CAM | Position::RM | Position::LM
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            Position::RW | Position::LW | Position::RF | Position::LF | Position::CF | Position::ST
        )
    }

    /// Can a card whose base position is `self` occupy a slot requiring
    /// `slot`? Exact role always fills; otherwise the compatibility table
    /// decides. The table is asymmetric domain data (RB may drop into CB,
    /// CB may not push out to RB's flank role).
    pub fn can_fill(&self, slot: Position) -> bool {
        if *self == slot {
            return true;
        }
        COMPATIBILITY
            .get(self)
            .map(|alts| alts.contains(&slot))
            .unwrap_or(false)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "RB" => Ok(Position::RB),
            "RWB" => Ok(Position::RWB),
            "CB" => Ok(Position::CB),
            "LB" => Ok(Position::LB),
            "LWB" => Ok(Position::LWB),
            "CDM" => Ok(Position::CDM),
            "CM" => Ok(Position::CM),
            "CAM" => Ok(Position::CAM),
            "RM" => Ok(Position::RM),
            "LM" => Ok(Position::LM),
            "RW" => Ok(Position::RW),
            "LW" => Ok(Position::LW),
            "RF" => Ok(Position::RF),
            "LF" => Ok(Position::LF),
            "CF" => Ok(Position::CF),
            "ST" => Ok(Position::ST),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// Roles each code may fill besides its exact role. Hand-authored table;
/// must stay stable for behavioral compatibility with existing squads.
static COMPATIBILITY: Lazy<HashMap<Position, Vec<Position>>> = Lazy::new(|| {
    use Position::*;
    HashMap::from([
        (GK, vec![]),
        (RB, vec![RWB, CB]),
        (RWB, vec![RB, RM]),
        (CB, vec![RB, LB, CDM]),
        (LB, vec![LWB, CB]),
        (LWB, vec![LB, LM]),
        (CDM, vec![CM, CB]),
        (CM, vec![CDM, CAM]),
        (CAM, vec![CM, CF, ST]),
        (RM, vec![RW, LM, RWB]),
        (LM, vec![LW, RM, LWB]),
        (RW, vec![RM, RF, LW]),
        (LW, vec![LM, LF, RW]),
        (RF, vec![CF, RW, ST]),
        (LF, vec![CF, LW, ST]),
        (CF, vec![ST, CAM, RF, LF]),
        (ST, vec![CF, RF, LF, RW, LW]),
    ])
});

/// Human-readable names and common spacing variants, keyed on the
/// whitespace-collapsed uppercase string. Looked up a second time with all
/// whitespace removed to catch "RIGHTBACK"-style compaction.
static ALIASES: Lazy<HashMap<&'static str, Position>> = Lazy::new(|| {
    use Position::*;
    HashMap::from([
        ("GOALKEEPER", GK),
        ("KEEPER", GK),
        ("RIGHT BACK", RB),
        ("RIGHT FULLBACK", RB),
        ("RIGHT WING BACK", RWB),
        ("RIGHT WINGBACK", RWB),
        ("CENTER BACK", CB),
        ("CENTRE BACK", CB),
        ("CENTRAL DEFENDER", CB),
        ("LEFT BACK", LB),
        ("LEFT FULLBACK", LB),
        ("LEFT WING BACK", LWB),
        ("LEFT WINGBACK", LWB),
        ("DEFENSIVE MID", CDM),
        ("DEFENSIVE MIDFIELDER", CDM),
        ("CENTRAL DEFENSIVE MIDFIELDER", CDM),
        ("HOLDING MIDFIELDER", CDM),
        ("CENTER MID", CM),
        ("CENTRE MID", CM),
        ("CENTER MIDFIELDER", CM),
        ("CENTRAL MIDFIELDER", CM),
        ("ATTACKING MID", CAM),
        ("ATTACKING MIDFIELDER", CAM),
        ("CENTRAL ATTACKING MIDFIELDER", CAM),
        ("PLAYMAKER", CAM),
        ("RIGHT MID", RM),
        ("RIGHT MIDFIELDER", RM),
        ("LEFT MID", LM),
        ("LEFT MIDFIELDER", LM),
        ("RIGHT WING", RW),
        ("RIGHT WINGER", RW),
        ("LEFT WING", LW),
        ("LEFT WINGER", LW),
        ("RIGHT FORWARD", RF),
        ("LEFT FORWARD", LF),
        ("CENTER FORWARD", CF),
        ("CENTRE FORWARD", CF),
        ("STRIKER", ST),
        ("FORWARD", ST),
    ])
});

/// Normalize one raw position label to a canonical code.
///
/// Pipeline: trim, uppercase, collapse internal whitespace; then try, in
/// order: canonical code, alias table, alias table with all whitespace
/// removed, and finally the letters-only form against both. `None` means
/// no canonical match — never an error.
pub fn normalize_one(raw: Option<&str>) -> Option<Position> {
    let raw = raw?;
    let collapsed = collapse_whitespace(&raw.trim().to_uppercase());
    if collapsed.is_empty() {
        return None;
    }

    if let Ok(pos) = Position::from_str(&collapsed) {
        return Some(pos);
    }
    if let Some(&pos) = ALIASES.get(collapsed.as_str()) {
        return Some(pos);
    }

    let compact: String = collapsed.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(&pos) = lookup_compact(&compact) {
        return Some(pos);
    }

    let letters: String = collapsed.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if let Ok(pos) = Position::from_str(&letters) {
        return Some(pos);
    }
    if let Some(&pos) = lookup_compact(&letters) {
        return Some(pos);
    }

    None
}

/// Whitespace-stripped alias lookup ("RIGHTBACK" → RB).
static ALIASES_COMPACT: Lazy<HashMap<String, Position>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(k, &v)| (k.chars().filter(|c| !c.is_whitespace()).collect(), v))
        .collect()
});

fn lookup_compact(key: &str) -> Option<&'static Position> {
    ALIASES_COMPACT.get(key)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a batch of raw labels: misses dropped, duplicates removed,
/// first-occurrence order preserved.
pub fn normalize_many<I, S>(values: I) -> Vec<Position>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<Position> = Vec::new();
    for value in values {
        if let Some(pos) = normalize_one(Some(value.as_ref())) {
            if !out.contains(&pos) {
                out.push(pos);
            }
        }
    }
    out
}

/// Can a card with the given raw position labels occupy a slot requiring
/// `slot_pos`? An unrecognized slot role can never be satisfied (the
/// catalog only emits canonical codes, so this is a data-integrity guard).
pub fn is_valid_for_slot<S: AsRef<str>>(slot_pos: &str, card_positions: &[S]) -> bool {
    let slot = match normalize_one(Some(slot_pos)) {
        Some(pos) => pos,
        None => return false,
    };
    normalize_many(card_positions.iter().map(|s| s.as_ref()))
        .iter()
        .any(|p| p.can_fill(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_codes() {
        for pos in Position::ALL {
            assert_eq!(
                normalize_one(Some(pos.as_str())),
                Some(pos),
                "Canonical code {} should normalize to itself",
                pos
            );
        }
    }

    #[test]
    fn test_alias_round_trip() {
        assert_eq!(normalize_one(Some("Right Back")), Some(Position::RB));
        assert_eq!(normalize_one(Some("RIGHTBACK")), Some(Position::RB));
        assert_eq!(normalize_one(Some("rb")), Some(Position::RB));
    }

    #[test]
    fn test_normalize_whitespace_and_case() {
        assert_eq!(normalize_one(Some("  Goalkeeper ")), Some(Position::GK));
        assert_eq!(normalize_one(Some("  center   mid  ")), Some(Position::CM));
        assert_eq!(normalize_one(Some("striker")), Some(Position::ST));
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_one(Some("C.D.M.")), Some(Position::CDM));
        assert_eq!(normalize_one(Some("RIGHT-BACK")), Some(Position::RB));
        assert_eq!(normalize_one(Some("R WB")), Some(Position::RWB));
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(normalize_one(Some("QUARTERBACK")), None);
        assert_eq!(normalize_one(Some("")), None);
        assert_eq!(normalize_one(Some("   ")), None);
        assert_eq!(normalize_one(None), None);
    }

    #[test]
    fn test_normalize_many_dedupes_in_order() {
        let out = normalize_many(["ST", "Striker", "CF", "st", "bogus"]);
        assert_eq!(out, vec![Position::ST, Position::CF]);
    }

    #[test]
    fn test_compatibility_examples() {
        assert!(Position::RB.can_fill(Position::RWB));
        assert!(Position::RB.can_fill(Position::CB));
        assert!(Position::ST.can_fill(Position::RW));
        assert!(Position::ST.can_fill(Position::LF));
        assert!(!Position::CB.can_fill(Position::ST));
        assert!(!Position::GK.can_fill(Position::CB));
        assert!(!Position::CB.can_fill(Position::GK));
    }

    #[test]
    fn test_compatibility_is_asymmetric() {
        // RB drops into CB, but CB does not push out to RWB.
        assert!(Position::RB.can_fill(Position::CB));
        assert!(!Position::CB.can_fill(Position::RWB));
    }

    #[test]
    fn test_is_valid_for_slot() {
        assert!(is_valid_for_slot("ST", &["ST"]));
        assert!(is_valid_for_slot("RW", &["ST"]));
        assert!(!is_valid_for_slot("ST", &["CB"]));
        assert!(is_valid_for_slot("CB", &["Right Back", "nonsense"]));
        // Unrecognized slot role can never be satisfied.
        assert!(!is_valid_for_slot("LIBERO", &["CB"]));
    }

    #[test]
    fn test_every_code_has_a_compatibility_entry() {
        for pos in Position::ALL {
            assert!(
                COMPATIBILITY.contains_key(&pos),
                "Compatibility table missing entry for {}",
                pos
            );
        }
    }

    #[test]
    fn test_compatibility_targets_are_canonical() {
        for (from, alts) in COMPATIBILITY.iter() {
            assert!(
                !alts.contains(from),
                "{} should not list its own role (exact match is implicit)",
                from
            );
        }
    }
}
