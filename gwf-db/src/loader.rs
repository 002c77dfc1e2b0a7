//! Loading functions for populating the in-memory SQLite database.
//!
//! Artifacts arrive as raw text (see `gwf_core::artifact`). Each well is
//! parsed and inserted independently: a well whose artifact cannot be
//! parsed is logged and skipped, and the rest of the wells still load.

use crate::Database;
use anyhow::Context;
use gwf_core::artifact::ArtifactSet;
use gwf_core::forecast::ForecastTable;
use gwf_core::model::ModelScore;
use gwf_core::well::{Well, WellKey};
use gwf_utils::dates::format_date;
use rusqlite::params;

impl Database {
    /// Load well metadata.
    pub fn load_wells(&self, wells: &[Well]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        for well in wells {
            conn.execute(
                "INSERT OR REPLACE INTO wells (well_key, name, station_id, latitude, longitude, about)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    well.key.as_str(),
                    well.name,
                    well.station_id,
                    well.latitude,
                    well.longitude,
                    well.about
                ],
            )?;
        }
        log::info!("loader: Loaded {} wells", wells.len());
        Ok(())
    }

    /// Replace a well's forecast rows with `table`.
    ///
    /// Observed depths go to `forecasts`; every `(date, model)` cell goes to
    /// `predictions`, missing values included, so a model column with gaps
    /// is still listed for the well.
    ///
    /// Rows are keyed by `(well, date)`, so a table that repeats a date is
    /// stored with one row for it: the later row replaces the earlier one
    /// and the residual fit sees fewer points than the raw table has.
    /// Repeats are logged; the table is otherwise taken as-is.
    pub fn load_forecast(&self, key: WellKey, table: &ForecastTable) -> anyhow::Result<()> {
        let distinct = table
            .records
            .iter()
            .map(|r| r.date)
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        if distinct < table.len() {
            log::warn!(
                "loader: {} repeats {} dates; keeping the last row for each",
                key,
                table.len() - distinct
            );
        }
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        tx.execute("DELETE FROM forecasts WHERE well_key = ?1", params![key.as_str()])?;
        tx.execute("DELETE FROM predictions WHERE well_key = ?1", params![key.as_str()])?;
        {
            let mut insert_forecast = tx.prepare(
                "INSERT OR REPLACE INTO forecasts (well_key, date, observed) VALUES (?1, ?2, ?3)",
            )?;
            let mut insert_prediction = tx.prepare(
                "INSERT OR REPLACE INTO predictions (well_key, date, model, model_order, value)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for record in &table.records {
                let date = format_date(&record.date);
                insert_forecast.execute(params![key.as_str(), date, record.observed])?;
                for (order, (model, value)) in
                    table.models.iter().zip(&record.predictions).enumerate()
                {
                    insert_prediction.execute(params![
                        key.as_str(),
                        date,
                        model,
                        order as i64,
                        value
                    ])?;
                }
            }
        }
        tx.commit()?;
        log::info!(
            "loader: Loaded {} forecast rows for {} (models: {:?})",
            table.len(),
            key,
            table.models
        );
        Ok(())
    }

    /// Replace a well's score rows.
    pub fn load_scores(&self, key: WellKey, scores: &[ModelScore]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM scores WHERE well_key = ?1", params![key.as_str()])?;
        for score in scores {
            conn.execute(
                "INSERT OR REPLACE INTO scores (well_key, model, r2, rmse) VALUES (?1, ?2, ?3, ?4)",
                params![key.as_str(), score.model, score.r2, score.rmse],
            )?;
        }
        log::info!("loader: Loaded {} scores for {}", scores.len(), key);
        Ok(())
    }

    /// Parse and load a prediction CSV.
    pub fn load_forecast_csv(&self, key: WellKey, csv_data: &str) -> anyhow::Result<()> {
        let table = ForecastTable::parse_csv(csv_data)
            .with_context(|| format!("parsing forecast table for {}", key))?;
        self.load_forecast(key, &table)
    }

    /// Parse and load a score mapping.
    pub fn load_scores_json(&self, key: WellKey, json: &str) -> anyhow::Result<()> {
        let scores = ModelScore::parse_scores_json(json)
            .with_context(|| format!("parsing scores for {}", key))?;
        self.load_scores(key, &scores)
    }

    /// Load every artifact in the set.
    ///
    /// Parse failures are logged per file and do not stop other files from
    /// loading; database errors are returned.
    pub fn load_artifacts(&self, artifacts: &ArtifactSet) -> anyhow::Result<()> {
        let mut skipped = 0u32;
        for (key, files) in artifacts.iter() {
            if let Some(csv_data) = &files.forecast_csv {
                match ForecastTable::parse_csv(csv_data) {
                    Ok(table) => self.load_forecast(key, &table)?,
                    Err(e) => {
                        log::error!("loader: Dropping forecast table for {}: {:#}", key, e);
                        skipped += 1;
                    }
                }
            }
            if let Some(json) = &files.scores_json {
                match ModelScore::parse_scores_json(json) {
                    Ok(scores) => self.load_scores(key, &scores)?,
                    Err(e) => {
                        log::error!("loader: Dropping scores for {}: {:#}", key, e);
                        skipped += 1;
                    }
                }
            }
        }
        log::info!(
            "loader: Loaded artifacts for {} wells, skipped {} unreadable files",
            artifacts.len(),
            skipped
        );
        Ok(())
    }
}
