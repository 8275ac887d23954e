//! Error types for the chemistry core.
//!
//! Unrecognized position input is not an error anywhere in this crate; it
//! degrades to "no canonical match" by policy. The variants here cover the
//! structural precondition violations the engine rejects up front.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChemError {
    #[error("Formation {formation} has duplicate slot key: {key}")]
    DuplicateSlotKey { formation: String, key: String },

    #[error("Placement key {key} does not exist in formation {formation}")]
    UnknownSlotKey { formation: String, key: String },

    #[error("No such slot key in placement: {key}")]
    NoSuchSlot { key: String },

    #[error("Placement is missing slot key {key} of formation {formation}")]
    MissingSlotKey { formation: String, key: String },

    #[error("Card id {card_id} is placed in more than one slot")]
    DuplicateCardId { card_id: String },

    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChemError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ChemError::Deserialization(err.to_string())
        } else {
            ChemError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ChemError>;
