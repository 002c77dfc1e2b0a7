//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js charts and the Leaflet well map are split across
//! `assets/js/*.js` and loaded at runtime. They are evaluated as globals
//! (no ES modules) and exposed via `window.*`. This module serializes data
//! and calls those globals once D3, Leaflet and the target container exist.

use wasm_bindgen::JsValue;

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static FORECAST_CHART_JS: &str = include_str!("../assets/js/forecast-chart.js");
static RESIDUAL_CHART_JS: &str = include_str!("../assets/js/residual-chart.js");
static WELL_MAP_JS: &str = include_str!("../assets/js/well-map.js");

/// Script for `document::eval` that forwards map marker clicks to Rust.
///
/// Each click sends the marker's tooltip text on the eval channel; the
/// receiving side turns it into `NavEvent::MarkerClicked`.
pub const MARKER_CLICK_LISTENER: &str = r#"
    window.__gwfOnMarkerClick = function(tooltip) {
        dioxus.send(tooltip);
    };
    await new Promise(function() {});
"#;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GWF JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("GWF JS eval failed:"), &e);
    }
}

/// Quote `s` as a JS string literal.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-libraries polling loop.
///
/// The chart JS files define functions like `renderForecastChart(...)` via
/// `function` declarations. To make them global (not block-scoped inside
/// the setInterval callback) they are evaluated with an indirect `eval()`
/// once D3 and Leaflet are loaded, then promoted to `window.*`.
/// Calling this more than once is harmless.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, FORECAST_CHART_JS, RESIDUAL_CHART_JS, WELL_MAP_JS].join("\n");

    let store_js = format!(
        "if (!window.__gwfChartsReady) {{ window.__gwfChartScripts = {}; }}",
        js_string_literal(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__gwfChartsReady || window.__gwfChartsPending) return;
            window.__gwfChartsPending = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__gwfChartScripts);
                    delete window.__gwfChartScripts;
                    if (typeof renderForecastChart !== 'undefined') window.renderForecastChart = renderForecastChart;
                    if (typeof renderResidualChart !== 'undefined') window.renderResidualChart = renderResidualChart;
                    if (typeof renderWellMap !== 'undefined') window.renderWellMap = renderWellMap;
                    if (typeof destroyWellMap !== 'undefined') window.destroyWellMap = destroyWellMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gwfChartsReady = true;
                    delete window.__gwfChartsPending;
                    console.log('GWF charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.{function}(containerId, dataJson)` once scripts and the
/// container are available.
fn render_when_ready(function: &str, container_id: &str, data_json: &str) {
    let id = js_string_literal(container_id);
    let data = js_string_literal(data_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gwfChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data});
                    }} catch(e) {{ console.error('[GWF] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the forecast depth chart from a serialized `ForecastChart`.
pub fn render_forecast_chart(container_id: &str, data_json: &str) {
    render_when_ready("renderForecastChart", container_id, data_json);
}

/// Render the residual scatter and trend line.
pub fn render_residual_chart(container_id: &str, data_json: &str) {
    render_when_ready("renderResidualChart", container_id, data_json);
}

/// Render the regional Leaflet map with one marker per well.
pub fn render_well_map(container_id: &str, data_json: &str) {
    render_when_ready("renderWellMap", container_id, data_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyWellMap) window.destroyWellMap({id}); \
         var el = document.getElementById({id}); if (el) el.innerHTML = '';",
        id = js_string_literal(container_id)
    ));
}
