use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ResidualModelSelectorProps {
    pub available_models: Vec<String>,
    /// Model currently analyzed
    pub current: String,
}

/// "Analyze Trend for:" dropdown.
#[component]
pub fn ResidualModelSelector(props: ResidualModelSelectorProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_change = move |evt: Event<FormData>| {
        state.residual_model.set(Some(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "residual-model-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Analyze Trend for:"
            }
            select {
                id: "residual-model-select",
                onchange: on_change,
                for model in props.available_models.iter() {
                    option {
                        value: "{model}",
                        selected: *model == props.current,
                        "{model}"
                    }
                }
            }
        }
    }
}
