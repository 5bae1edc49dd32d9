//! Toast notifications.

use crate::state::AppState;
use dash_core::notification::NotificationSink;
use dioxus::prelude::*;

/// Vertical distance between stacked toasts.
const TOAST_SPACING_PX: usize = 64;

/// Fixed-position alerts in the top-right corner, newest at the bottom.
///
/// Each toast can be closed by hand; the auto-dismiss timer started in
/// `AppState::show_notification` tolerates that.
#[component]
pub fn Toasts() -> Element {
    let state = use_context::<AppState>();
    let toasts: Vec<_> = state
        .notifications
        .read()
        .iter()
        .enumerate()
        .map(|(index, n)| {
            let class = format!(
                "alert {} alert-dismissible fade show position-fixed",
                n.kind.css_class()
            );
            let style = format!(
                "top: {}px; right: 20px; z-index: 9999;",
                20 + index * TOAST_SPACING_PX
            );
            (n.id, n.message.clone(), class, style)
        })
        .collect();

    rsx! {
        for (id, message, class, style) in toasts {
            div {
                key: "{id.0}",
                class: "{class}",
                role: "alert",
                style: "{style}",
                "{message}"
                button {
                    r#type: "button",
                    class: "btn-close",
                    aria_label: "Cerrar",
                    onclick: move |_| {
                        state.dismiss(id);
                    },
                }
            }
        }
    }
}
