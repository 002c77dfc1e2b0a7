//! In-memory SQLite database layer for groundwater forecasts.
//!
//! Prediction tables and score mappings are parsed by `gwf-core` and
//! inserted into an in-memory SQLite database; the dashboard then asks
//! typed questions of it (which models does this well have, give me the
//! observed series, give me complete observed/predicted pairs for a model).
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Artifact text embedded at compile time by the consuming crate
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use gwf_core::artifact::{ArtifactSet, WellArtifacts};
//! use gwf_core::well::WellKey;
//! use gwf_db::Database;
//!
//! let mut artifacts = ArtifactSet::new();
//! artifacts.insert(
//!     WellKey::Withams,
//!     WellArtifacts::from_embedded(
//!         "date,Actual,LSTM_Pred\n2024-01-07,5.1,5.2\n",
//!         r#"{"LSTM": {"R2": 0.95, "RMSE": 0.18}}"#,
//!     ),
//! );
//! let db = Database::with_artifacts(&artifacts).unwrap();
//!
//! assert_eq!(db.query_models(WellKey::Withams).unwrap(), vec!["LSTM"]);
//! assert!(!db.has_forecast(WellKey::Greenbush).unwrap());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod cache;
mod loader;
pub mod models;
mod queries;
pub mod schema;

use gwf_core::artifact::ArtifactSet;
use gwf_core::well::Well;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding wells, forecasts and scores.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database with the embedded well registry and every
    /// artifact in `artifacts` loaded.
    pub fn with_artifacts(artifacts: &ArtifactSet) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_wells(&Well::get_well_vector()?)?;
        db.load_artifacts(artifacts)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gwf_core::well::WellKey;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_wells(&Well::get_well_vector().unwrap()).unwrap();
        let wells = db2.query_wells().unwrap();
        assert_eq!(wells.len(), 4, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_wells().unwrap().is_empty());
        assert!(!db.has_forecast(WellKey::Withams).unwrap());
    }

    #[test]
    fn with_artifacts_loads_registry_even_without_files() {
        let db = Database::with_artifacts(&ArtifactSet::new()).unwrap();
        assert_eq!(db.query_wells().unwrap().len(), 4);
        for key in WellKey::ALL {
            assert!(!db.has_forecast(key).unwrap());
            assert!(!db.has_scores(key).unwrap());
        }
    }
}
