//! Per-well page: description, forecast chart, scores and residual trend.
//!
//! Sections whose data is missing for the well are left out; a well
//! without a forecast table still shows its description.

use dioxus::prelude::*;
use gwf_chart_ui::components::{
    BackButton, ChartContainer, ChartHeader, Notice, ResidualModelSelector, ScoreTable,
    TraceSelector, WellAbout,
};
use gwf_chart_ui::js_bridge;
use gwf_chart_ui::state::AppState;
use gwf_core::model::{ModelScore, Trace};
use gwf_core::well::{Well, WellKey};
use gwf_data::forecast::{build_forecast_chart, select_traces};
use gwf_data::residual::{analyze_residuals, pick_residual_model, ResidualAnalysis, ResidualChart};
use gwf_db::Database;
use gwf_utils::dates::parse_date;

const FORECAST_CHART_ID: &str = "forecast-chart";
const RESIDUAL_CHART_ID: &str = "residual-chart";

/// What the page knows about a well before any chart is drawn.
#[derive(Clone, PartialEq, Default)]
struct WellSummary {
    info: Option<Well>,
    models: Vec<String>,
    has_forecast: bool,
    has_scores: bool,
    scores: Vec<ModelScore>,
}

fn summarize(db: &Database, well: WellKey) -> anyhow::Result<WellSummary> {
    let has_scores = db.has_scores(well)?;
    Ok(WellSummary {
        info: db.query_well(well)?,
        models: db.query_models(well)?,
        has_forecast: db.has_forecast(well)?,
        has_scores,
        scores: if has_scores { db.query_scores(well)? } else { Vec::new() },
    })
}

/// Draw the forecast chart for the requested traces.
fn render_forecast(db: &Database, well: WellKey, requested: &[Trace]) -> anyhow::Result<()> {
    let Some(span) = db.query_date_span(well)? else {
        js_bridge::destroy_chart(FORECAST_CHART_ID);
        return Ok(());
    };
    let first = parse_date(&span.first)?;
    let models = db.query_models(well)?;

    let mut series = Vec::new();
    for trace in select_traces(requested, &models) {
        let points = db.query_trace_series(well, &trace)?;
        series.push((trace, points));
    }
    let chart = build_forecast_chart(first, series);
    log::info!(
        "well_page: forecast chart for {} with {} series",
        well,
        chart.series.len()
    );
    js_bridge::render_forecast_chart(FORECAST_CHART_ID, &serde_json::to_string(&chart)?);
    Ok(())
}

fn residual_analysis(db: &Database, well: WellKey, model: &str) -> anyhow::Result<Option<ResidualAnalysis>> {
    let rows = db.query_residual_inputs(well, model)?;
    Ok(analyze_residuals(model, &rows))
}

fn residual_chart_json(db: &Database, well: WellKey, chosen: Option<&str>) -> anyhow::Result<Option<String>> {
    let models = db.query_models(well)?;
    let Some(model) = pick_residual_model(chosen, &models) else {
        return Ok(None);
    };
    match residual_analysis(db, well, &model)? {
        Some(analysis) => Ok(Some(serde_json::to_string(&ResidualChart::from(&analysis))?)),
        None => Ok(None),
    }
}

#[component]
pub fn WellPage(well: WellKey) -> Element {
    let state = use_context::<AppState>();

    // Forecast chart follows the trace selection
    use_effect(move || {
        let requested = state.selected_traces.read().clone();
        let Some(db) = state.db.read().clone() else {
            return;
        };
        js_bridge::init_charts();
        if let Err(e) = render_forecast(&db, well, &requested) {
            log::error!("well_page: forecast chart for {} failed: {:#}", well, e);
        }
    });

    // Residual chart follows the residual model choice
    use_effect(move || {
        let chosen = state.residual_model.read().clone();
        let Some(db) = state.db.read().clone() else {
            return;
        };
        match residual_chart_json(&db, well, chosen.as_deref()) {
            Ok(Some(json)) => {
                js_bridge::init_charts();
                js_bridge::render_residual_chart(RESIDUAL_CHART_ID, &json);
            }
            Ok(None) => js_bridge::destroy_chart(RESIDUAL_CHART_ID),
            Err(e) => log::error!("well_page: residual chart for {} failed: {:#}", well, e),
        }
    });

    let db = state.db.read().clone();
    let summary = db
        .as_ref()
        .map(|db| summarize(db, well))
        .transpose()
        .unwrap_or_else(|e| {
            log::error!("well_page: failed to query {}: {:#}", well, e);
            None
        })
        .unwrap_or_default();
    let residual_model = pick_residual_model(
        state.residual_model.read().as_deref(),
        &summary.models,
    );
    let analysis = match (&db, &residual_model) {
        (Some(db), Some(model)) => residual_analysis(db, well, model).unwrap_or_else(|e| {
            log::error!("well_page: residual query for {} failed: {:#}", well, e);
            None
        }),
        _ => None,
    };

    let title = summary
        .info
        .as_ref()
        .map(|w| w.display_name())
        .unwrap_or_else(|| well.to_string());
    let about = summary
        .info
        .as_ref()
        .map(|w| w.about.clone())
        .unwrap_or_default();

    rsx! {
        h1 {
            style: "margin: 0 0 8px 0; font-size: 28px;",
            "{title}"
        }
        h3 { style: "margin: 8px 0 4px 0;", "About the Well" }
        WellAbout { text: about }
        BackButton {}

        if summary.has_forecast {
            ChartHeader {
                title: "Groundwater Level Forecast".to_string(),
                caption: "Depth below land surface in feet; deeper is lower on the chart.".to_string(),
            }
            TraceSelector { available_models: summary.models.clone() }
            ChartContainer {
                id: FORECAST_CHART_ID.to_string(),
                min_height: 420,
            }

            if summary.has_scores {
                ChartHeader { title: "Model Performance Scores".to_string() }
                ScoreTable { scores: summary.scores.clone() }
            }

            hr {}
            ChartHeader {
                title: "Error Trend Analysis (Residuals)".to_string(),
                caption: "Observed minus predicted depth with a fitted linear trend.".to_string(),
            }
            if let Some(model) = residual_model.clone() {
                ResidualModelSelector {
                    available_models: summary.models.clone(),
                    current: model,
                }
            }
            if let Some(analysis) = analysis.as_ref() {
                ResidualSummary {
                    model: analysis.model.clone(),
                    slope: analysis.trend.slope,
                    mean: analysis.mean_residual,
                    count: analysis.points.len(),
                }
                ChartContainer {
                    id: RESIDUAL_CHART_ID.to_string(),
                    min_height: 360,
                }
            } else {
                Notice { message: "No overlapping observed and predicted values to analyze for this model.".to_string() }
            }
        }
    }
}

/// One-line reading of the trend fit.
#[component]
fn ResidualSummary(model: String, slope: f64, mean: f64, count: usize) -> Element {
    let direction = if mean > 0.0 {
        "deeper than predicted"
    } else if mean < 0.0 {
        "shallower than predicted"
    } else {
        "unbiased"
    };
    let text = format!(
        "{model}: mean error {mean:+.3} ft ({direction}) over {count} points, trend {slope:+.5} ft per step"
    );

    rsx! {
        p {
            style: "margin: 4px 0 8px 0; font-size: 13px; color: #455A64;",
            "{text}"
        }
    }
}
