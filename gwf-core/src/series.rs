//! Row types passed from the database layer to chart assembly.

use serde::Serialize;

/// A single (date, value) pair used for line chart data points.
///
/// `date` is `YYYY-MM-DD`; `value` is depth below land surface in feet,
/// `None` where the table has no value so the line breaks there.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: Option<f64>,
}

/// An observed depth and one model's prediction for the same date.
///
/// Only produced for dates where both values exist.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObservedPredicted {
    pub date: String,
    pub observed: f64,
    pub predicted: f64,
}
