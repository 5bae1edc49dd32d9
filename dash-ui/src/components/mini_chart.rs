//! Container for a mini chart inside a summary card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MiniChartProps {
    /// The DOM id the chart hook renders into
    pub id: String,
    #[props(default = 40)]
    pub height: u32,
}

#[component]
pub fn MiniChart(props: MiniChartProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            id: "{props.id}",
            class: "mini-chart",
            style: "{style}",
        }
    }
}
