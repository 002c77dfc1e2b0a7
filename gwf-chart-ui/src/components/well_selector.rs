//! Sidebar dropdown for choosing a well or the overview.

use crate::state::AppState;
use dioxus::prelude::*;
use gwf_core::navigation::{parse_sidebar_value, NavEvent, HOME};

/// Station selector.
/// Mirrors the current view and navigates on change.
#[component]
pub fn WellSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options: Vec<(&'static str, String)> = state
        .wells
        .read()
        .iter()
        .map(|w| (w.key.as_str(), w.display_name()))
        .collect();
    let selected = (state.view)().sidebar_value();

    let on_change = move |evt: Event<FormData>| match parse_sidebar_value(&evt.value()) {
        Ok(choice) => state.navigate(NavEvent::SidebarSelect(choice)),
        Err(e) => log::warn!("sidebar: ignoring selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "well-select",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Select Station:"
            }
            select {
                id: "well-select",
                style: "width: 100%;",
                onchange: on_change,
                option {
                    value: HOME,
                    selected: selected == HOME,
                    "Overview"
                }
                for (value, label) in options {
                    option {
                        value: value,
                        selected: value == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
