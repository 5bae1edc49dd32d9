//! Full-page loading overlay.

use crate::state::AppState;
use dash_core::loader::{LOADER_ID, LOADER_LABEL};
use dioxus::prelude::*;

/// Rendered only once the loader has been shown for the first time; after
/// that the same element is kept and toggled with `display`.
#[component]
pub fn LoadingOverlay() -> Element {
    let state = use_context::<AppState>();
    let loader = *state.loader.read();

    if !loader.is_created() {
        return rsx! {};
    }

    let style = format!(
        "display: {}; position: fixed; top: 0; left: 0; width: 100%; height: 100%; background-color: rgba(255, 255, 255, 0.8); z-index: 9999;",
        loader.display()
    );

    rsx! {
        div {
            id: LOADER_ID,
            style: "{style}",
            div {
                style: "display: flex; justify-content: center; align-items: center; height: 100%;",
                div {
                    class: "spinner-border text-primary",
                    role: "status",
                    span { class: "visually-hidden", "{LOADER_LABEL}" }
                }
            }
        }
    }
}
