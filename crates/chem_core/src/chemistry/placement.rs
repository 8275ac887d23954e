//! Slot-key → card assignment for the currently selected formation.
//!
//! A placement always covers exactly the slot keys of one formation; an
//! empty slot is an explicit `None`, never a missing entry. Switching
//! formation re-derives the placement rather than merging: cards survive
//! only if their slot key exists in both layouts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ChemError, Result};
use crate::formation::Formation;
use crate::models::Card;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Placement {
    slots: BTreeMap<String, Option<Card>>,
}

impl Placement {
    /// All-empty placement covering the formation's slot keys.
    pub fn empty(formation: &Formation) -> Self {
        Self {
            slots: formation
                .slots
                .iter()
                .map(|s| (s.key.clone(), None))
                .collect(),
        }
    }

    /// Placement from a raw slot-key map, as deserialized from a host.
    /// Key-set agreement with the formation is checked at compute time
    /// via `validate_against`, not here.
    pub fn from_map(slots: BTreeMap<String, Option<Card>>) -> Self {
        Self { slots }
    }

    /// Put a card into a slot, replacing whatever was there.
    pub fn assign(&mut self, key: &str, card: Card) -> Result<()> {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = Some(card);
                Ok(())
            }
            None => Err(ChemError::NoSuchSlot { key: key.to_string() }),
        }
    }

    /// Empty a slot.
    pub fn clear(&mut self, key: &str) -> Result<()> {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = None;
                Ok(())
            }
            None => Err(ChemError::NoSuchSlot { key: key.to_string() }),
        }
    }

    /// Card at a slot key, if the key exists and is occupied.
    pub fn get(&self, key: &str) -> Option<&Card> {
        self.slots.get(key).and_then(|c| c.as_ref())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.values().filter(|c| c.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Card>)> {
        self.slots.iter().map(|(k, c)| (k.as_str(), c.as_ref()))
    }

    /// Re-derive this placement for a newly selected formation: keys
    /// present in both layouts keep their card, keys only in the new
    /// layout start empty, cards on dropped keys are discarded.
    pub fn rebuilt_for(&self, formation: &Formation) -> Placement {
        Self {
            slots: formation
                .slots
                .iter()
                .map(|s| (s.key.clone(), self.get(&s.key).cloned()))
                .collect(),
        }
    }

    /// The engine requires exact key-set equality with the formation:
    /// no extra keys, no missing keys.
    pub fn validate_against(&self, formation: &Formation) -> Result<()> {
        for slot in &formation.slots {
            if !self.slots.contains_key(&slot.key) {
                return Err(ChemError::MissingSlotKey {
                    formation: formation.name.clone(),
                    key: slot.key.clone(),
                });
            }
        }
        for key in self.slots.keys() {
            if formation.slot(key).is_none() {
                return Err(ChemError::UnknownSlotKey {
                    formation: formation.name.clone(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::{by_name, FormationSlot};
    use crate::position::Position;

    fn card(id: &str, pos: &str) -> Card {
        Card {
            id: id.to_string(),
            name: format!("Player {}", id),
            overall: 80,
            position: Some(pos.to_string()),
            alt_position: None,
            positions: Vec::new(),
            club_id: None,
            club: None,
            nation_id: None,
            nation: None,
            league_id: None,
            league: None,
            price: None,
        }
    }

    #[test]
    fn test_empty_covers_all_slot_keys() {
        let formation = by_name("4-4-2").unwrap();
        let placement = Placement::empty(&formation);
        assert_eq!(placement.occupied_count(), 0);
        assert!(placement.validate_against(&formation).is_ok());
    }

    #[test]
    fn test_assign_and_clear() {
        let formation = by_name("4-4-2").unwrap();
        let mut placement = Placement::empty(&formation);

        placement.assign("LST", card("1", "ST")).expect("LST exists in 4-4-2");
        assert_eq!(placement.occupied_count(), 1);
        assert_eq!(placement.get("LST").map(|c| c.id.as_str()), Some("1"));

        placement.clear("LST").expect("LST exists in 4-4-2");
        assert_eq!(placement.occupied_count(), 0);
    }

    #[test]
    fn test_assign_unknown_key_fails() {
        let formation = by_name("4-4-2").unwrap();
        let mut placement = Placement::empty(&formation);
        assert!(placement.assign("CF", card("1", "CF")).is_err());
    }

    #[test]
    fn test_rebuild_preserves_shared_keys_and_drops_the_rest() {
        let from = by_name("4-4-2").unwrap();
        let to = by_name("4-3-3").unwrap();
        let mut placement = Placement::empty(&from);
        placement.assign("GK", card("gk", "GK")).unwrap();
        placement.assign("LCM", card("mid", "CM")).unwrap();
        placement.assign("LST", card("fw", "ST")).unwrap();

        let rebuilt = placement.rebuilt_for(&to);
        assert!(rebuilt.validate_against(&to).is_ok());
        // GK and LCM exist in both layouts; LST does not exist in 4-3-3.
        assert_eq!(rebuilt.get("GK").map(|c| c.id.as_str()), Some("gk"));
        assert_eq!(rebuilt.get("LCM").map(|c| c.id.as_str()), Some("mid"));
        assert_eq!(rebuilt.occupied_count(), 2);
    }

    #[test]
    fn test_validate_against_detects_missing_and_extra_keys() {
        let formation = by_name("4-3-3").unwrap();
        let other = crate::formation::Formation::new(
            "tiny",
            vec![FormationSlot::new("GK", Position::GK, 50.0, 5.0)],
        );

        let placement = Placement::empty(&other);
        let err = placement
            .validate_against(&formation)
            .expect_err("placement of a different formation should fail");
        assert!(matches!(err, ChemError::MissingSlotKey { .. }));

        let placement = Placement::empty(&formation);
        let err = placement
            .validate_against(&other)
            .expect_err("placement with extra keys should fail");
        assert!(matches!(err, ChemError::UnknownSlotKey { .. }));
    }
}
