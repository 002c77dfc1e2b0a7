//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 or Leaflet renders into
    pub id: String,
    /// Height in pixels; the map needs a fixed one
    #[props(default = 420)]
    pub min_height: u32,
}

/// A fixed-height container div for charts and the well map.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let inner_style = format!("width: 100%; height: {}px;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "{inner_style}",
            }
        }
    }
}
