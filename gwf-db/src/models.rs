//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

pub use gwf_core::model::ModelScore;
pub use gwf_core::series::{DateValue, ObservedPredicted};
pub use gwf_core::well::Well;

/// First and last date of a well's forecast table (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateSpan {
    pub first: String,
    pub last: String,
}
