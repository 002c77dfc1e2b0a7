//! Model performance table.

use dioxus::prelude::*;
use gwf_core::model::ModelScore;

#[derive(Props, Clone, PartialEq)]
pub struct ScoreTableProps {
    pub scores: Vec<ModelScore>,
}

/// One row per model with R² and RMSE.
#[component]
pub fn ScoreTable(props: ScoreTableProps) -> Element {
    let cell = "padding: 6px 12px; border-bottom: 1px solid #E0E0E0; text-align: left;";
    let num_cell = "padding: 6px 12px; border-bottom: 1px solid #E0E0E0; text-align: right; font-variant-numeric: tabular-nums;";
    let rows: Vec<(String, String, String)> = props
        .scores
        .iter()
        .map(|s| (s.model.clone(), format!("{:.3}", s.r2), format!("{:.3}", s.rmse)))
        .collect();

    rsx! {
        table {
            style: "border-collapse: collapse; font-size: 14px; margin: 8px 0;",
            thead {
                tr {
                    style: "background: #F5F5F5;",
                    th { style: "{cell}", "Model" }
                    th { style: "{num_cell}", "R2" }
                    th { style: "{num_cell}", "RMSE" }
                }
            }
            tbody {
                for (model, r2, rmse) in rows {
                    tr {
                        key: "{model}",
                        td { style: "{cell}", "{model}" }
                        td { style: "{num_cell}", "{r2}" }
                        td { style: "{num_cell}", "{rmse}" }
                    }
                }
            }
        }
    }
}
