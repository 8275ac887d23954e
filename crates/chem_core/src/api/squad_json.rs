//! JSON entry points for squad-builder hosts.
//!
//! The engine itself is typed and pure; this wrapper exists for callers
//! that hold their squad state as JSON (the web squad builder). Formation
//! is addressed by display name, placement by slot key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::chemistry::{self, Placement};
use crate::error::{ChemError, Result};
use crate::formation::{self, FormationSlot};
use crate::models::Card;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct ChemistryRequest {
    pub schema_version: u8,
    /// Formation display name, e.g. "4-2-3-1 (2)".
    pub formation: String,
    /// Slot key → card or null; must cover the formation's keys exactly.
    pub placement: BTreeMap<String, Option<Card>>,
}

#[derive(Debug, Serialize)]
pub struct ChemistryResponse {
    pub schema_version: u8,
    pub formation: String,
    pub per_card_chem: BTreeMap<String, u8>,
    pub team_chem: u8,
}

/// Compute chemistry for a JSON request, returning a JSON response.
pub fn compute_chemistry_json(request_json: &str) -> Result<String> {
    let request: ChemistryRequest = serde_json::from_str(request_json)?;
    debug!(formation = %request.formation, "chemistry request received");

    let formation = formation::by_name(&request.formation)
        .ok_or_else(|| ChemError::UnknownFormation(request.formation.clone()))?;

    // The engine enforces exact key-set agreement: extra keys and missing
    // keys both fail, empty slots must be explicit nulls.
    let placement = Placement::from_map(request.placement);

    let result = chemistry::compute_chemistry(&placement, &formation)?;
    let response = ChemistryResponse {
        schema_version: SCHEMA_VERSION,
        formation: formation.name,
        per_card_chem: result.per_card_chem,
        team_chem: result.team_chem,
    };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Serialize)]
struct FormationEntry {
    name: String,
    slots: Vec<FormationSlot>,
}

/// Catalog dump for the formation picker: names plus slot keys, required
/// roles, and pitch coordinates.
pub fn get_formations_json() -> String {
    let entries: Vec<FormationEntry> = formation::all_formations()
        .into_iter()
        .map(|f| FormationEntry { name: f.name, slots: f.slots })
        .collect();
    // Static data, serialization cannot fail.
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_json(id: &str, pos: &str, club_id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Player {}", id),
            "overall": 85,
            "position": pos,
            "club_id": club_id,
        })
    }

    fn empty_placement(formation: &str) -> serde_json::Map<String, serde_json::Value> {
        crate::formation::by_name(formation)
            .unwrap()
            .slots
            .iter()
            .map(|s| (s.key.clone(), serde_json::Value::Null))
            .collect()
    }

    #[test]
    fn test_compute_chemistry_json_round_trip() {
        let mut placement = empty_placement("4-4-2");
        placement.insert("LST".to_string(), card_json("a", "ST", 10));
        placement.insert("RST".to_string(), card_json("b", "Striker", 10));

        let request = json!({
            "schema_version": 1,
            "formation": "4-4-2",
            "placement": placement,
        });

        let response = compute_chemistry_json(&request.to_string())
            .expect("valid request should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["formation"], "4-4-2");
        assert_eq!(parsed["per_card_chem"]["a"], 1);
        assert_eq!(parsed["per_card_chem"]["b"], 1);
        assert_eq!(parsed["team_chem"], 2);
    }

    #[test]
    fn test_unknown_formation_is_rejected() {
        let request = json!({
            "schema_version": 1,
            "formation": "2-2-6",
            "placement": {},
        });
        let err = compute_chemistry_json(&request.to_string())
            .expect_err("unknown formation should fail");
        assert!(matches!(err, ChemError::UnknownFormation(_)));
    }

    #[test]
    fn test_unknown_slot_key_is_rejected() {
        let mut placement = empty_placement("4-4-2");
        placement.insert("CF".to_string(), card_json("a", "CF", 1));

        let request = json!({
            "schema_version": 1,
            "formation": "4-4-2",
            "placement": placement,
        });
        assert!(compute_chemistry_json(&request.to_string()).is_err());
    }

    #[test]
    fn test_partial_placement_is_rejected() {
        // The placement must cover every slot key; empty slots are
        // explicit nulls, not omissions.
        let request = json!({
            "schema_version": 1,
            "formation": "4-4-2",
            "placement": { "GK": null },
        });
        let err = compute_chemistry_json(&request.to_string())
            .expect_err("partial placement should fail");
        assert!(matches!(err, ChemError::MissingSlotKey { .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = compute_chemistry_json("{not json")
            .expect_err("malformed input should fail");
        assert!(matches!(err, ChemError::Deserialization(_)));
    }

    #[test]
    fn test_get_formations_json_lists_catalog() {
        let parsed: serde_json::Value =
            serde_json::from_str(&get_formations_json()).expect("catalog should serialize");
        let entries = parsed.as_array().expect("catalog should be an array");
        assert_eq!(entries.len(), 12);
        for entry in entries {
            assert_eq!(entry["slots"].as_array().unwrap().len(), 11);
            assert!(entry["slots"][0]["key"].is_string());
            assert!(entry["slots"][0]["x"].is_number());
        }
    }
}
