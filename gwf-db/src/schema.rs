//! SQL schema definitions for the in-memory SQLite database.
//!
//! Applied as a single batch when the database is created.

/// Returns the full SQL schema as a single batch string.
///
/// - `wells` - static well metadata (key, name, USGS station, coordinates, description)
/// - `forecasts` - one row per well and date with the observed depth (NULL past the last measurement)
/// - `predictions` - one row per well, date and model with the predicted depth
/// - `scores` - one row per well and model with R² and RMSE
///
/// Dates are `YYYY-MM-DD` text, so `ORDER BY date` is chronological.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS wells (
        well_key TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        station_id TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        about TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS forecasts (
        well_key TEXT NOT NULL,
        date TEXT NOT NULL,
        observed REAL,
        PRIMARY KEY (well_key, date)
    );

    CREATE TABLE IF NOT EXISTS predictions (
        well_key TEXT NOT NULL,
        date TEXT NOT NULL,
        model TEXT NOT NULL,
        model_order INTEGER NOT NULL,
        value REAL,
        PRIMARY KEY (well_key, date, model)
    );
    CREATE INDEX IF NOT EXISTS idx_pred_well_model ON predictions(well_key, model);

    CREATE TABLE IF NOT EXISTS scores (
        well_key TEXT NOT NULL,
        model TEXT NOT NULL,
        r2 REAL NOT NULL,
        rmse REAL NOT NULL,
        PRIMARY KEY (well_key, model)
    );
    "#
}
