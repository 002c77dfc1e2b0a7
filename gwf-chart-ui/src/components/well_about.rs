use dioxus::prelude::*;

/// "About the Well" info box.
#[component]
pub fn WellAbout(text: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; border-radius: 4px; border: 1px solid #90CAF9; line-height: 1.5;",
            strong { "About the Well: " }
            "{text}"
        }
    }
}
