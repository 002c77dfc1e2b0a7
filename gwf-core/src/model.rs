use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Suffix marking a prediction column in a forecast table (`LSTM_Pred`).
pub const PREDICTION_SUFFIX: &str = "_Pred";

/// A selectable series on the forecast chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trace {
    Observed,
    Model(String),
}

impl Trace {
    /// Series shown when a well page first opens.
    pub fn default_selection() -> Vec<Trace> {
        vec![Trace::Observed, Trace::Model("LSTM".to_string())]
    }

    /// Chart legend label.
    pub fn label(&self) -> &str {
        match self {
            Trace::Observed => "Observed",
            Trace::Model(name) => name,
        }
    }

    /// Line color for the chart.
    pub fn color(&self) -> &'static str {
        match self {
            Trace::Observed => "black",
            Trace::Model(name) => match name.as_str() {
                "MLR" => "blue",
                "CNN" => "green",
                "LSTM" => "red",
                _ => "gray",
            },
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Trace {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("empty trace name");
        }
        if s.eq_ignore_ascii_case("observed") || s.eq_ignore_ascii_case("actual") {
            Ok(Trace::Observed)
        } else {
            Ok(Trace::Model(s.to_string()))
        }
    }
}

/// One row of a well's score table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore {
    pub model: String,
    /// Coefficient of determination on the test period
    pub r2: f64,
    /// Root mean squared error in feet
    pub rmse: f64,
}

/// Score entries appear either as `{"R2": .., "RMSE": ..}` or `[r2, rmse]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Named {
        #[serde(rename = "R2", alias = "r2")]
        r2: f64,
        #[serde(rename = "RMSE", alias = "rmse")]
        rmse: f64,
    },
    Pair([f64; 2]),
}

impl ModelScore {
    /// Flatten a score mapping (model -> metrics) into one row per model,
    /// ordered by model name.
    pub fn parse_scores_json(json: &str) -> anyhow::Result<Vec<ModelScore>> {
        let raw: BTreeMap<String, RawScore> = serde_json::from_str(json)?;
        Ok(raw
            .into_iter()
            .map(|(model, score)| {
                let (r2, rmse) = match score {
                    RawScore::Named { r2, rmse } => (r2, rmse),
                    RawScore::Pair([r2, rmse]) => (r2, rmse),
                };
                ModelScore { model, r2, rmse }
            })
            .collect())
    }
}
