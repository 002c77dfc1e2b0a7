//! Per-well forecast tables.
//!
//! A prediction artifact is a CSV with a date column, an observed depth
//! column and one `{MODEL}_Pred` column per model. Column names drift
//! between artifact generations, so the date column may be `date` or
//! `Date` and the observed column `Actual` or `gw_depth_ft`.

use crate::model::PREDICTION_SUFFIX;
use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use gwf_utils::dates::parse_date_flexible;

/// Accepted names of the date column; all are normalized to `date`.
pub const DATE_COLUMNS: [&str; 2] = ["date", "Date"];

/// Observed depth column names, in order of preference.
pub const OBSERVED_COLUMNS: [&str; 2] = ["Actual", "gw_depth_ft"];

/// One dated row of a forecast table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    /// Observed depth in feet; absent past the last measurement
    pub observed: Option<f64>,
    /// Predicted depth per model, aligned with [`ForecastTable::models`]
    pub predictions: Vec<Option<f64>>,
}

/// A well's forecast table in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastTable {
    /// Model names taken from the `_Pred` columns, in column order
    pub models: Vec<String>,
    pub records: Vec<ForecastRecord>,
}

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    observed: Option<usize>,
    models: Vec<(String, usize)>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let date = DATE_COLUMNS
            .iter()
            .find_map(|name| find(*name))
            .context("forecast table has no date column")?;
        let observed = OBSERVED_COLUMNS.iter().find_map(|name| find(*name));
        if observed.is_none() {
            log::warn!("forecast table has no observed column (tried {:?})", OBSERVED_COLUMNS);
        }
        let models = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, h)| {
                h.trim()
                    .strip_suffix(PREDICTION_SUFFIX)
                    .filter(|name| !name.is_empty())
                    .map(|name| (name.to_string(), idx))
            })
            .collect();
        Ok(Columns {
            date,
            observed,
            models,
        })
    }
}

/// Parse a numeric cell; blanks and NaN markers are missing values.
fn parse_value(cell: Option<&str>) -> Option<f64> {
    let s = cell?.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl ForecastTable {
    /// Parse a prediction artifact.
    ///
    /// Fails when the date column is missing or any date cannot be parsed.
    /// A missing observed column is tolerated (all observations are absent).
    /// Row order and date uniqueness are taken as given.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<ForecastTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let columns = Columns::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let r = result?;
            let raw_date = r.get(columns.date).unwrap_or("");
            let date = parse_date_flexible(raw_date)
                .with_context(|| format!("forecast row {}", line + 1))?;
            records.push(ForecastRecord {
                date,
                observed: columns.observed.and_then(|idx| parse_value(r.get(idx))),
                predictions: columns
                    .models
                    .iter()
                    .map(|(_, idx)| parse_value(r.get(*idx)))
                    .collect(),
            });
        }

        Ok(ForecastTable {
            models: columns.models.into_iter().map(|(name, _)| name).collect(),
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
