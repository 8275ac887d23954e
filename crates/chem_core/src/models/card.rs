//! Card entity as received from the marketplace API.
//!
//! # Boundary Contract
//! - Cards are external, immutable inputs; the engine never mutates them.
//! - Position labels are free text and must go through the position
//!   resolver before use.
//! - Club/nation/league arrive as a numeric id, a display name, or both;
//!   the id wins when present.

use serde::{Deserialize, Serialize};

use crate::position::{self, Position};

/// A player card placed into the squad builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub overall: u8,

    /// Primary position label, free text ("ST", "Striker", ...).
    #[serde(default)]
    pub position: Option<String>,

    /// Alternate position label, free text.
    #[serde(default)]
    pub alt_position: Option<String>,

    /// Explicit position list; takes precedence over the single fields.
    #[serde(default)]
    pub positions: Vec<String>,

    #[serde(default)]
    pub club_id: Option<u64>,
    #[serde(default)]
    pub club: Option<String>,

    #[serde(default)]
    pub nation_id: Option<u64>,
    #[serde(default)]
    pub nation: Option<String>,

    #[serde(default)]
    pub league_id: Option<u64>,
    #[serde(default)]
    pub league: Option<String>,

    /// Last known market price, if the watchlist has one.
    #[serde(default)]
    pub price: Option<u64>,
}

/// Grouping identity for one membership dimension (club, nation, league).
/// Two cards share a group if they share an id or, absent ids, a trimmed
/// case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Id(u64),
    Name(String),
}

impl GroupKey {
    fn resolve(id: Option<u64>, name: Option<&str>) -> Option<GroupKey> {
        if let Some(id) = id {
            return Some(GroupKey::Id(id));
        }
        let name = name?.trim();
        if name.is_empty() {
            None
        } else {
            Some(GroupKey::Name(name.to_lowercase()))
        }
    }
}

impl Card {
    /// All canonical positions this card can claim, deduplicated in
    /// first-occurrence order: the explicit list first, then the primary
    /// and alternate single fields.
    pub fn canonical_positions(&self) -> Vec<Position> {
        let mut raw: Vec<&str> = self.positions.iter().map(String::as_str).collect();
        if let Some(p) = self.position.as_deref() {
            raw.push(p);
        }
        if let Some(p) = self.alt_position.as_deref() {
            raw.push(p);
        }
        position::normalize_many(raw)
    }

    pub fn club_key(&self) -> Option<GroupKey> {
        GroupKey::resolve(self.club_id, self.club.as_deref())
    }

    pub fn nation_key(&self) -> Option<GroupKey> {
        GroupKey::resolve(self.nation_id, self.nation.as_deref())
    }

    pub fn league_key(&self) -> Option<GroupKey> {
        GroupKey::resolve(self.league_id, self.league.as_deref())
    }
}
