//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! It is also the `DashboardView` handed to the controller, so every write the
//! controller makes lands in a signal and re-renders the affected components.

use crate::js_bridge::BrowserTimer;
use dash_core::controller::DashboardView;
use dash_core::loader::LoaderOverlay;
use dash_core::notification::{
    expire_after, NotificationId, NotificationKind, NotificationQueue, NotificationSink,
};
use dash_core::response::DashboardData;
use dioxus::prelude::*;
use std::collections::BTreeMap;

/// Shared application state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loading overlay (not rendered until first shown)
    pub loader: Signal<LoaderOverlay>,
    /// Toasts currently on screen
    pub notifications: Signal<NotificationQueue>,
    /// Last successful refresh, formatted es-ES
    pub last_update: Signal<Option<String>>,
    /// Data from the last successful refresh
    pub data: Signal<Option<DashboardData>>,
    /// Current value of each date filter, keyed by element id
    pub filter_values: Signal<BTreeMap<String, String>>,
    /// Delay before a toast removes itself
    pub notification_timeout_ms: u32,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new(notification_timeout_ms: u32) -> Self {
        Self {
            loader: Signal::new(LoaderOverlay::new()),
            notifications: Signal::new(NotificationQueue::new()),
            last_update: Signal::new(None),
            data: Signal::new(None),
            filter_values: Signal::new(BTreeMap::new()),
            notification_timeout_ms,
        }
    }
}

impl NotificationSink for AppState {
    fn notify(&self, message: String, kind: NotificationKind) -> NotificationId {
        let mut notifications = self.notifications;
        let id = notifications.write().push(message, kind);
        id
    }

    /// Safe to call after the timer already removed the toast.
    fn dismiss(&self, id: NotificationId) -> bool {
        let mut notifications = self.notifications;
        let removed = notifications.write().dismiss(id);
        removed
    }
}

impl DashboardView for AppState {
    fn set_loading(&self, show: bool) {
        let mut loader = self.loader;
        loader.write().show(show);
    }

    fn set_last_update(&self, target_id: &str, text: String) {
        log::debug!("Updating #{} to {}", target_id, text);
        let mut last_update = self.last_update;
        last_update.set(Some(text));
    }

    fn update_summary(&self, data: &DashboardData) {
        let mut current = self.data;
        current.set(Some(data.clone()));
    }

    fn show_notification(&self, message: String, kind: NotificationKind) {
        let id = self.notify(message, kind);

        let state = *self;
        spawn(async move {
            expire_after(&state, &BrowserTimer, id, state.notification_timeout_ms).await;
        });
    }
}
