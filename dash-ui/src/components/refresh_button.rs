//! Refresh trigger button.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RefreshButtonProps {
    /// DOM id of the button
    pub id: String,
    #[props(default = "Actualizar".to_string())]
    pub label: String,
    pub onclick: EventHandler<()>,
}

/// Button that starts a refresh cycle. Disabled while the loader is visible.
#[component]
pub fn RefreshButton(props: RefreshButtonProps) -> Element {
    let state = use_context::<AppState>();
    let busy = state.loader.read().is_visible();

    rsx! {
        button {
            id: "{props.id}",
            r#type: "button",
            class: "btn btn-outline-primary btn-sm",
            disabled: busy,
            onclick: move |_| props.onclick.call(()),
            "{props.label}"
        }
    }
}
