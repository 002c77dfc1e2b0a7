//! Regional overview: project title, the well map and the project summary.

use dioxus::prelude::*;
use gwf_chart_ui::components::ChartContainer;
use gwf_chart_ui::js_bridge;
use gwf_chart_ui::state::AppState;
use gwf_data::map::build_well_map;

/// Leaflet map container DOM element ID.
const MAP_ID: &str = "well-map";

#[component]
pub fn Overview() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let wells = state.wells.read().clone();
        if wells.is_empty() {
            return;
        }
        js_bridge::init_charts();
        match serde_json::to_string(&build_well_map(&wells)) {
            Ok(json) => js_bridge::render_well_map(MAP_ID, &json),
            Err(e) => log::error!("overview: failed to serialize map: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_chart(MAP_ID));

    rsx! {
        h1 {
            style: "margin: 0 0 8px 0; font-size: 28px;",
            "Groundwater Level Forecast: Virginia Eastern Shore"
        }
        h4 {
            style: "margin: 0 0 16px 0; font-style: italic; font-weight: normal; color: #455A64;",
            "This project was completed as part of the Eastern University MS in Data Science Capstone Project."
        }
        hr {}
        ChartContainer {
            id: MAP_ID.to_string(),
            min_height: 450,
        }
        hr {}
        AboutProject {}
    }
}

#[component]
fn AboutProject() -> Element {
    rsx! {
        h2 { "About the Project" }
        p {
            "Groundwater is one of the most important resources that humans use to survive. In the Eastern Shore of Virginia, it is the sole resource used for human consumption (drinking) and crop irrigation, therefore managing groundwater is critical to both the residents living on the Shore and the agricultural community. The majority of both drinking and irrigation water is obtained from wells that tap into the Columbia and Yorktown-Eastover multi-aquifer system (Masterson et al., 2016)."
        }
        p {
            "In 1997, the U.S. Environmental Protection Agency (EPA) designated this area as a Sole Source Aquifer due to the lack of any large-scale fresh-surface-water streams to be used as an alternate source of water (U.S. EPA, 1997). The primary factors that affect groundwater levels in this area include extraction rates of groundwater; and geologic structures such as the buried paleo-channels that include the Exmore and Eastville ancient river channels which can both significantly impact groundwater flow and increase the risk of saltwater intrusion (Powars et al., 2010)."
        }
        p {
            "Previous studies have demonstrated that machine learning, deep learning, and time-series analysis have been successful in identifying the complex nonlinear patterns in hydrogeologic data. This project implemented and compared Multiple Linear Regression (MLR), a baseline model, with more advanced deep learning architectures, specifically Convolutional Neural Networks (CNN) and Long Short-Term Memory (LSTM) networks."
        }
        p { "These models were developed to predict Groundwater Levels (GWL) in four significant USGS monitored wells:" }
        WellList {}
        p {
            "The models were trained using a large comprehensive daily dataset of information from 2007-2025 and included precipitation lags, evaporation, soil temperature and soil moisture to provide multiple-day predictions, including a recursive multi-day forecast out to 2026."
        }
    }
}

#[component]
fn WellList() -> Element {
    let state = use_context::<AppState>();
    let items: Vec<(String, String)> = state
        .wells
        .read()
        .iter()
        .map(|w| (format!("USGS {}", w.station_id), w.name.clone()))
        .collect();

    rsx! {
        ul {
            for (station, name) in items {
                li {
                    strong { "{station}" }
                    " ({name})"
                }
            }
        }
    }
}
