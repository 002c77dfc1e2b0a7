//! Checkbox group for the forecast chart series.

use crate::state::AppState;
use dioxus::prelude::*;
use gwf_core::model::Trace;

#[derive(Props, Clone, PartialEq)]
pub struct TraceSelectorProps {
    /// Model columns present in the current well's table
    pub available_models: Vec<String>,
}

/// Toggles which traces the forecast chart requests.
///
/// The selection is kept across wells; models a well lacks stay selected
/// but are simply not drawn for it.
#[component]
pub fn TraceSelector(props: TraceSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let selected = state.selected_traces.read().clone();

    let options: Vec<Trace> = std::iter::once(Trace::Observed)
        .chain(props.available_models.iter().cloned().map(Trace::Model))
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Select Models:" }
            for trace in options {
                TraceToggle {
                    key: "{trace}",
                    checked: selected.contains(&trace),
                    trace: trace.clone(),
                }
            }
        }
    }
}

#[component]
fn TraceToggle(trace: Trace, checked: bool) -> Element {
    let mut state = use_context::<AppState>();
    let color = trace.color();
    let label = trace.label().to_string();

    let on_toggle = move |_: Event<FormData>| {
        let mut traces = state.selected_traces.write();
        if let Some(pos) = traces.iter().position(|t| *t == trace) {
            traces.remove(pos);
        } else {
            traces.push(trace.clone());
        }
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 4px; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_toggle,
            }
            span {
                style: "display: inline-block; width: 14px; height: 3px; background: {color};",
            }
            "{label}"
        }
    }
}
