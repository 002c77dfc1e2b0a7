use crate::state::AppState;
use dioxus::prelude::*;
use gwf_core::navigation::NavEvent;

/// Returns to the regional overview.
#[component]
pub fn BackButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            style: "margin: 8px 0; padding: 6px 14px; border: 1px solid #90A4AE; border-radius: 4px; background: #FFFFFF; cursor: pointer;",
            onclick: move |_| state.navigate(NavEvent::Back),
            "Back to Regional Map"
        }
    }
}
