//! Formation layouts for the squad builder.
//!
//! A formation is a named, ordered list of slots. Each slot carries a
//! unique key (the placement map's address), the canonical role required
//! to count as in-position, and pitch coordinates used only for rendering.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ChemError, Result};
use crate::position::Position;

pub use catalog::{all_formations, by_name, formation_names};

/// One slot on the pitch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    /// Unique within the formation; placement maps address slots by key.
    pub key: String,
    /// Required role for chemistry purposes.
    pub pos: Position,
    /// 0 = left touchline, 100 = right touchline.
    pub x: f32,
    /// 0 = own goal, 100 = opponent goal.
    pub y: f32,
}

impl FormationSlot {
    pub fn new(key: &str, pos: Position, x: f32, y: f32) -> Self {
        Self { key: key.to_string(), pos, x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

/// A named tactical layout: an ordered sequence of distinct slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: &str, slots: Vec<FormationSlot>) -> Self {
        Self { name: name.to_string(), slots }
    }

    pub fn slot_keys(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn slot(&self, key: &str) -> Option<&FormationSlot> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Duplicate slot keys make the placement map ambiguous; reject them
    /// up front instead of silently misbehaving.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.key.as_str()) {
                return Err(ChemError::DuplicateSlotKey {
                    formation: self.name.clone(),
                    key: slot.key.clone(),
                });
            }
        }
        Ok(())
    }
}
