//! # chem_core - Squad Chemistry Engine
//!
//! Core logic for the card squad builder: canonical position resolution,
//! the static formation catalog, and the pure chemistry computation over a
//! slot-key → card placement.
//!
//! ## Guarantees
//! - `compute_chemistry` is a pure function: same placement + formation
//!   always yields the same result, nothing is cached between calls
//! - Unrecognized position labels never error; they degrade to
//!   out-of-position (chemistry 0)
//! - Per-card chemistry is bounded to 0..=3, team chemistry to 0..=33

pub mod api;
pub mod chemistry;
pub mod error;
pub mod formation;
pub mod models;
pub mod position;

// Re-export main API functions
pub use api::{compute_chemistry_json, get_formations_json, ChemistryRequest, ChemistryResponse};
pub use chemistry::{
    compute_chemistry, ChemistryResult, Placement, MAX_CARD_CHEM, MAX_TEAM_CHEM,
};
pub use error::{ChemError, Result};
pub use formation::{all_formations, by_name, formation_names, Formation, FormationSlot};
pub use models::{Card, GroupKey};
pub use position::{is_valid_for_slot, normalize_many, normalize_one, Position};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
