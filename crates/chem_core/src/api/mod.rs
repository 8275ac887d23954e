pub mod squad_json;

pub use squad_json::{
    compute_chemistry_json, get_formations_json, ChemistryRequest, ChemistryResponse,
};
