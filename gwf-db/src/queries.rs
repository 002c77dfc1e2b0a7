//! Typed query methods for retrieving forecast data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.

use crate::models::{DateSpan, DateValue, ModelScore, ObservedPredicted, Well};
use crate::Database;
use gwf_core::model::Trace;
use gwf_core::well::WellKey;
use rusqlite::{params, OptionalExtension};

impl Database {
    // ───────────────────── Wells ─────────────────────

    /// All wells, in registry order.
    pub fn query_wells(&self) -> anyhow::Result<Vec<Well>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT well_key, name, station_id, latitude, longitude, about FROM wells",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut wells = rows
            .into_iter()
            .map(|(key, name, station_id, latitude, longitude, about)| {
                Ok(Well {
                    key: key.parse()?,
                    name,
                    station_id,
                    latitude,
                    longitude,
                    about,
                })
            })
            .collect::<anyhow::Result<Vec<Well>>>()?;
        wells.sort_by_key(|w| WellKey::ALL.iter().position(|k| *k == w.key));
        Ok(wells)
    }

    /// Metadata for one well.
    pub fn query_well(&self, key: WellKey) -> anyhow::Result<Option<Well>> {
        Ok(self.query_wells()?.into_iter().find(|w| w.key == key))
    }

    /// Whether the well has a loaded forecast table.
    pub fn has_forecast(&self, key: WellKey) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM forecasts WHERE well_key = ?1 LIMIT 1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Whether the well has loaded scores.
    pub fn has_scores(&self, key: WellKey) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM scores WHERE well_key = ?1 LIMIT 1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    // ───────────────────── Forecasts ─────────────────────

    /// Model names of the well's prediction columns, in column order.
    pub fn query_models(&self, key: WellKey) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT model FROM predictions
             WHERE well_key = ?1
             GROUP BY model
             ORDER BY MIN(model_order)",
        )?;
        let rows = stmt
            .query_map(params![key.as_str()], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// First and last date of the well's table.
    pub fn query_date_span(&self, key: WellKey) -> anyhow::Result<Option<DateSpan>> {
        let conn = self.conn.borrow();
        let (first, last): (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM forecasts WHERE well_key = ?1",
            params![key.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(first.zip(last).map(|(first, last)| DateSpan { first, last }))
    }

    /// Observed depths for every table date; unmeasured dates are `None`.
    pub fn query_observed_series(&self, key: WellKey) -> anyhow::Result<Vec<DateValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, observed FROM forecasts
             WHERE well_key = ?1
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![key.as_str()], |row| {
                Ok(DateValue {
                    date: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_observed_series({}) returned {} records",
            key,
            rows.len()
        );
        Ok(rows)
    }

    /// One model's predicted depths; missing cells are `None`.
    pub fn query_model_series(&self, key: WellKey, model: &str) -> anyhow::Result<Vec<DateValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT date, value FROM predictions
             WHERE well_key = ?1 AND model = ?2
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![key.as_str(), model], |row| {
                Ok(DateValue {
                    date: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_model_series({}, {}) returned {} records",
            key,
            model,
            rows.len()
        );
        Ok(rows)
    }

    /// Series for a chart trace. Unknown models yield an empty series.
    pub fn query_trace_series(&self, key: WellKey, trace: &Trace) -> anyhow::Result<Vec<DateValue>> {
        match trace {
            Trace::Observed => self.query_observed_series(key),
            Trace::Model(model) => self.query_model_series(key, model),
        }
    }

    /// Dates where both the observed depth and `model`'s prediction exist.
    pub fn query_residual_inputs(
        &self,
        key: WellKey,
        model: &str,
    ) -> anyhow::Result<Vec<ObservedPredicted>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT f.date, f.observed, p.value
             FROM forecasts f
             INNER JOIN predictions p ON p.well_key = f.well_key AND p.date = f.date
             WHERE f.well_key = ?1 AND p.model = ?2
               AND f.observed IS NOT NULL AND p.value IS NOT NULL
             ORDER BY f.date",
        )?;
        let rows = stmt
            .query_map(params![key.as_str(), model], |row| {
                Ok(ObservedPredicted {
                    date: row.get(0)?,
                    observed: row.get(1)?,
                    predicted: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_residual_inputs({}, {}) returned {} records",
            key,
            model,
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Scores ─────────────────────

    /// Score table rows for the well, ordered by model name.
    pub fn query_scores(&self, key: WellKey) -> anyhow::Result<Vec<ModelScore>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT model, r2, rmse FROM scores WHERE well_key = ?1 ORDER BY model",
        )?;
        let rows = stmt
            .query_map(params![key.as_str()], |row| {
                Ok(ModelScore {
                    model: row.get(0)?,
                    r2: row.get(1)?,
                    rmse: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use gwf_core::model::Trace;
    use gwf_core::well::{Well, WellKey};

    fn setup_db() -> Database {
        let db = Database::new().unwrap();
        db.load_wells(&Well::get_well_vector().unwrap()).unwrap();
        db.load_forecast_csv(
            WellKey::Churchneck,
            "\
date,Actual,MLR_Pred,CNN_Pred,LSTM_Pred
2024-01-21,,8.30,8.25,8.31
2024-01-07,8.10,8.40,,8.12
2024-01-14,8.20,8.35,8.15,8.22
",
        )
        .unwrap();
        db.load_scores_json(
            WellKey::Churchneck,
            r#"{"MLR": [0.79, 0.45], "CNN": [0.89, 0.26], "LSTM": [0.94, 0.20]}"#,
        )
        .unwrap();
        db
    }

    #[test]
    fn query_wells_in_registry_order() {
        let db = setup_db();
        let keys: Vec<WellKey> = db.query_wells().unwrap().iter().map(|w| w.key).collect();
        assert_eq!(keys, WellKey::ALL.to_vec());
        let well = db.query_well(WellKey::Capecharles).unwrap().unwrap();
        assert_eq!(well.station_id, "371543076003401");
    }

    #[test]
    fn query_models_keeps_column_order() {
        let db = setup_db();
        assert_eq!(
            db.query_models(WellKey::Churchneck).unwrap(),
            vec!["MLR", "CNN", "LSTM"]
        );
        assert!(db.query_models(WellKey::Withams).unwrap().is_empty());
    }

    #[test]
    fn query_date_span_sorts_dates() {
        let db = setup_db();
        let span = db.query_date_span(WellKey::Churchneck).unwrap().unwrap();
        assert_eq!(span.first, "2024-01-07");
        assert_eq!(span.last, "2024-01-21");
        assert!(db.query_date_span(WellKey::Withams).unwrap().is_none());
    }

    #[test]
    fn query_observed_series_keeps_gaps() {
        let db = setup_db();
        let observed = db.query_observed_series(WellKey::Churchneck).unwrap();
        let values: Vec<Option<f64>> = observed.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![Some(8.10), Some(8.20), None]);
        assert_eq!(observed[0].date, "2024-01-07");
    }

    #[test]
    fn query_model_series_keeps_gaps() {
        let db = setup_db();
        let cnn = db.query_model_series(WellKey::Churchneck, "CNN").unwrap();
        let values: Vec<Option<f64>> = cnn.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![None, Some(8.15), Some(8.25)]);
    }

    #[test]
    fn query_trace_series_for_unknown_model_is_empty() {
        let db = setup_db();
        let series = db
            .query_trace_series(WellKey::Churchneck, &Trace::Model("GRU".to_string()))
            .unwrap();
        assert!(series.is_empty());
        let cnn = db
            .query_trace_series(WellKey::Churchneck, &Trace::Model("CNN".to_string()))
            .unwrap();
        assert_eq!(cnn.len(), 3);
    }

    #[test]
    fn query_residual_inputs_drops_incomplete_rows() {
        let db = setup_db();
        // Jan 7 lacks CNN, Jan 21 lacks an observation.
        let cnn = db.query_residual_inputs(WellKey::Churchneck, "CNN").unwrap();
        assert_eq!(cnn.len(), 1);
        assert_eq!(cnn[0].date, "2024-01-14");
        assert_eq!(cnn[0].observed, 8.20);
        assert_eq!(cnn[0].predicted, 8.15);

        let lstm = db.query_residual_inputs(WellKey::Churchneck, "LSTM").unwrap();
        let dates: Vec<&str> = lstm.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-07", "2024-01-14"]);
    }

    #[test]
    fn query_scores_ordered_by_model() {
        let db = setup_db();
        let scores = db.query_scores(WellKey::Churchneck).unwrap();
        let models: Vec<&str> = scores.iter().map(|s| s.model.as_str()).collect();
        assert_eq!(models, vec!["CNN", "LSTM", "MLR"]);
        assert!(db.query_scores(WellKey::Withams).unwrap().is_empty());
    }

    #[test]
    fn has_forecast_and_scores_per_well() {
        let db = setup_db();
        assert!(db.has_forecast(WellKey::Churchneck).unwrap());
        assert!(db.has_scores(WellKey::Churchneck).unwrap());
        assert!(!db.has_forecast(WellKey::Greenbush).unwrap());
        assert!(!db.has_scores(WellKey::Greenbush).unwrap());
        assert!(db.query_well(WellKey::Greenbush).unwrap().is_some());
    }
}
