//! Groundwater Level Forecast: Virginia Eastern Shore
//!
//! A single-page dashboard for four USGS monitoring wells. The overview
//! shows a regional map; clicking a marker or picking a station in the
//! sidebar opens that well's page with its forecast chart, model scores
//! and a residual trend analysis.
//!
//! Data flow:
//! 1. `build.rs` reads the per-well prediction tables and score mappings
//!    from the artifact directory and writes them into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary; a missing file is
//!    an empty string.
//! 3. On mount, the artifacts are parsed into an in-memory SQLite database
//!    once per page lifetime (`gwf_db::cache`).
//! 4. Every user action becomes a `NavEvent`; the page on screen is a pure
//!    function of `AppState.view`.

mod overview;
mod well_page;

use dioxus::prelude::*;
use gwf_chart_ui::components::{LoadingSpinner, Notice, NoticeKind, Sidebar};
use gwf_chart_ui::js_bridge;
use gwf_chart_ui::state::AppState;
use gwf_core::artifact::{ArtifactSet, WellArtifacts};
use gwf_core::navigation::{NavEvent, View};
use gwf_core::well::WellKey;
use gwf_db::{cache, Database};

macro_rules! embedded_artifacts {
    ($key:expr, $name:literal) => {
        (
            $key,
            include_str!(concat!(env!("OUT_DIR"), "/model_predictions_", $name, ".csv")),
            include_str!(concat!(env!("OUT_DIR"), "/model_scores_", $name, ".json")),
        )
    };
}

/// Forecast table and score mapping text per well, as written by `build.rs`.
const EMBEDDED: [(WellKey, &str, &str); 4] = [
    embedded_artifacts!(WellKey::Withams, "withams"),
    embedded_artifacts!(WellKey::Greenbush, "greenbush"),
    embedded_artifacts!(WellKey::Churchneck, "churchneck"),
    embedded_artifacts!(WellKey::Capecharles, "capecharles"),
];

fn embedded_artifact_set() -> ArtifactSet {
    let mut set = ArtifactSet::new();
    for (key, forecast_csv, scores_json) in EMBEDDED {
        set.insert(key, WellArtifacts::from_embedded(forecast_csv, scores_json));
    }
    set
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gwf-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load artifacts on mount
    use_effect(move || {
        let loaded = cache::shared_database(|| Database::with_artifacts(&embedded_artifact_set()))
            .and_then(|db| Ok((db.query_wells()?, db)));
        match loaded {
            Ok((wells, db)) => {
                log::info!("dashboard: {} wells ready", wells.len());
                state.wells.set(wells);
                state.db.set(Some(db));
            }
            Err(e) => {
                log::error!("Failed to load forecast artifacts: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load forecast data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // Map marker clicks arrive as tooltip text over the eval channel
    use_future(move || async move {
        let mut listener = document::eval(js_bridge::MARKER_CLICK_LISTENER);
        loop {
            match listener.recv::<String>().await {
                Ok(tooltip) => state.navigate(NavEvent::MarkerClicked(tooltip)),
                Err(e) => {
                    log::warn!("marker click listener closed: {:?}", e);
                    break;
                }
            }
        }
    });

    let page = match (state.view)() {
        View::Overview => rsx! { overview::Overview {} },
        View::WellDetail(well) => rsx! { well_page::WellPage { key: "{well}", well } },
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Sidebar {}

            main {
                style: "flex: 1; padding: 16px 24px; max-width: 1100px;",
                if let Some(err) = (state.error_msg)() {
                    Notice { message: err, kind: NoticeKind::Error }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    {page}
                }
            }
        }
    }
}
