//! Last-update timestamp display.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LastUpdateProps {
    /// DOM id of the text target
    pub id: String,
}

#[component]
pub fn LastUpdate(props: LastUpdateProps) -> Element {
    let state = use_context::<AppState>();
    let text = (state.last_update)().unwrap_or_else(|| "--:--:--".to_string());

    rsx! {
        small {
            style: "color: #666;",
            "Última actualización: "
            span { id: "{props.id}", "{text}" }
        }
    }
}
