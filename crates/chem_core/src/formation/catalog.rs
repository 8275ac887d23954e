//! Static formation catalog.
//!
//! Twelve layouts, eleven slots each, enumerated by hand. Coordinates are
//! pitch-normalized (x: 0 = left touchline, 100 = right; y: 0 = own goal,
//! 100 = opponent goal) and exist purely for rendering; chemistry never
//! reads them. Slot keys and required roles are load-bearing: existing
//! squads address slots by key, so both must stay stable.

use super::{Formation, FormationSlot};
use crate::position::Position::*;

/// Every layout the squad builder offers, in menu order.
pub fn all_formations() -> Vec<Formation> {
    vec![
        create_343(),
        create_352(),
        create_41212(),
        create_4141(),
        create_4231(),
        create_4231_2(),
        create_433(),
        create_433_2(),
        create_442(),
        create_442_2(),
        create_451(),
        create_532(),
    ]
}

/// Display names, in menu order.
pub fn formation_names() -> Vec<String> {
    all_formations().into_iter().map(|f| f.name).collect()
}

/// Look up a layout by its display name (exact match).
pub fn by_name(name: &str) -> Option<Formation> {
    all_formations().into_iter().find(|f| f.name == name)
}

fn create_343() -> Formation {
    Formation::new(
        "3-4-3",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LCB", CB, 30.0, 20.0),
            FormationSlot::new("CCB", CB, 50.0, 20.0),
            FormationSlot::new("RCB", CB, 70.0, 20.0),
            FormationSlot::new("LM", LM, 12.0, 50.0),
            FormationSlot::new("LCM", CM, 38.0, 50.0),
            FormationSlot::new("RCM", CM, 62.0, 50.0),
            FormationSlot::new("RM", RM, 88.0, 50.0),
            FormationSlot::new("LW", LW, 20.0, 80.0),
            FormationSlot::new("ST", ST, 50.0, 86.0),
            FormationSlot::new("RW", RW, 80.0, 80.0),
        ],
    )
}

fn create_352() -> Formation {
    Formation::new(
        "3-5-2",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LCB", CB, 30.0, 20.0),
            FormationSlot::new("CCB", CB, 50.0, 20.0),
            FormationSlot::new("RCB", CB, 70.0, 20.0),
            FormationSlot::new("LM", LM, 10.0, 50.0),
            FormationSlot::new("LDM", CDM, 38.0, 40.0),
            FormationSlot::new("CAM", CAM, 50.0, 62.0),
            FormationSlot::new("RDM", CDM, 62.0, 40.0),
            FormationSlot::new("RM", RM, 90.0, 50.0),
            FormationSlot::new("LST", ST, 40.0, 84.0),
            FormationSlot::new("RST", ST, 60.0, 84.0),
        ],
    )
}

fn create_41212() -> Formation {
    Formation::new(
        "4-1-2-1-2",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("CDM", CDM, 50.0, 35.0),
            FormationSlot::new("LM", LM, 20.0, 52.0),
            FormationSlot::new("RM", RM, 80.0, 52.0),
            FormationSlot::new("CAM", CAM, 50.0, 65.0),
            FormationSlot::new("LST", ST, 40.0, 85.0),
            FormationSlot::new("RST", ST, 60.0, 85.0),
        ],
    )
}

fn create_4141() -> Formation {
    Formation::new(
        "4-1-4-1",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("CDM", CDM, 50.0, 35.0),
            FormationSlot::new("LM", LM, 15.0, 55.0),
            FormationSlot::new("LCM", CM, 40.0, 55.0),
            FormationSlot::new("RCM", CM, 60.0, 55.0),
            FormationSlot::new("RM", RM, 85.0, 55.0),
            FormationSlot::new("ST", ST, 50.0, 85.0),
        ],
    )
}

fn create_4231() -> Formation {
    Formation::new(
        "4-2-3-1",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LDM", CDM, 40.0, 38.0),
            FormationSlot::new("RDM", CDM, 60.0, 38.0),
            FormationSlot::new("LAM", CAM, 22.0, 62.0),
            FormationSlot::new("CAM", CAM, 50.0, 62.0),
            FormationSlot::new("RAM", CAM, 78.0, 62.0),
            FormationSlot::new("ST", ST, 50.0, 86.0),
        ],
    )
}

/// 4-2-3-1 with wide midfielders instead of wide playmakers.
fn create_4231_2() -> Formation {
    Formation::new(
        "4-2-3-1 (2)",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LDM", CDM, 40.0, 38.0),
            FormationSlot::new("RDM", CDM, 60.0, 38.0),
            FormationSlot::new("LM", LM, 15.0, 58.0),
            FormationSlot::new("CAM", CAM, 50.0, 62.0),
            FormationSlot::new("RM", RM, 85.0, 58.0),
            FormationSlot::new("ST", ST, 50.0, 86.0),
        ],
    )
}

fn create_433() -> Formation {
    Formation::new(
        "4-3-3",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LCM", CM, 32.0, 48.0),
            FormationSlot::new("CM", CM, 50.0, 45.0),
            FormationSlot::new("RCM", CM, 68.0, 48.0),
            FormationSlot::new("LW", LW, 15.0, 80.0),
            FormationSlot::new("ST", ST, 50.0, 86.0),
            FormationSlot::new("RW", RW, 85.0, 80.0),
        ],
    )
}

/// 4-3-3 with a holding midfielder.
fn create_433_2() -> Formation {
    Formation::new(
        "4-3-3 (2)",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LCM", CM, 32.0, 50.0),
            FormationSlot::new("CDM", CDM, 50.0, 38.0),
            FormationSlot::new("RCM", CM, 68.0, 50.0),
            FormationSlot::new("LW", LW, 15.0, 80.0),
            FormationSlot::new("ST", ST, 50.0, 86.0),
            FormationSlot::new("RW", RW, 85.0, 80.0),
        ],
    )
}

fn create_442() -> Formation {
    Formation::new(
        "4-4-2",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LM", LM, 15.0, 50.0),
            FormationSlot::new("LCM", CM, 40.0, 50.0),
            FormationSlot::new("RCM", CM, 60.0, 50.0),
            FormationSlot::new("RM", RM, 85.0, 50.0),
            FormationSlot::new("LST", ST, 40.0, 84.0),
            FormationSlot::new("RST", ST, 60.0, 84.0),
        ],
    )
}

/// 4-4-2 with two holding midfielders.
fn create_442_2() -> Formation {
    Formation::new(
        "4-4-2 (2)",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LM", LM, 15.0, 52.0),
            FormationSlot::new("LDM", CDM, 40.0, 40.0),
            FormationSlot::new("RDM", CDM, 60.0, 40.0),
            FormationSlot::new("RM", RM, 85.0, 52.0),
            FormationSlot::new("LST", ST, 40.0, 84.0),
            FormationSlot::new("RST", ST, 60.0, 84.0),
        ],
    )
}

fn create_451() -> Formation {
    Formation::new(
        "4-5-1",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LB", LB, 18.0, 20.0),
            FormationSlot::new("LCB", CB, 38.0, 20.0),
            FormationSlot::new("RCB", CB, 62.0, 20.0),
            FormationSlot::new("RB", RB, 82.0, 20.0),
            FormationSlot::new("LM", LM, 12.0, 50.0),
            FormationSlot::new("LCM", CM, 35.0, 50.0),
            FormationSlot::new("CM", CM, 50.0, 50.0),
            FormationSlot::new("RCM", CM, 65.0, 50.0),
            FormationSlot::new("RM", RM, 88.0, 50.0),
            FormationSlot::new("ST", ST, 50.0, 85.0),
        ],
    )
}

fn create_532() -> Formation {
    Formation::new(
        "5-3-2",
        vec![
            FormationSlot::new("GK", GK, 50.0, 5.0),
            FormationSlot::new("LWB", LWB, 8.0, 32.0),
            FormationSlot::new("LCB", CB, 30.0, 18.0),
            FormationSlot::new("CCB", CB, 50.0, 18.0),
            FormationSlot::new("RCB", CB, 70.0, 18.0),
            FormationSlot::new("RWB", RWB, 92.0, 32.0),
            FormationSlot::new("LCM", CM, 35.0, 52.0),
            FormationSlot::new("CM", CM, 50.0, 48.0),
            FormationSlot::new("RCM", CM, 65.0, 52.0),
            FormationSlot::new("LST", ST, 40.0, 84.0),
            FormationSlot::new("RST", ST, 60.0, 84.0),
        ],
    )
}
