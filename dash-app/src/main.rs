//! Executive Accounting Dashboard
//!
//! Summary cards, monthly income statement and last-update time for the
//! accounting system, refreshed on demand from `/api/dashboard-data`.
//!
//! Data flow:
//! 1. `dashboard.json` is embedded with `include_str!` and describes which
//!    optional page elements exist (refresh button, date filters, mini charts).
//! 2. On mount, one `DashboardController` is built with the browser data
//!    source, the reactive `AppState` as its view, and the JS mini-chart hook.
//! 3. The refresh button and date filters are rendered from the controller's
//!    bindings; each fires the bound `UiEvent`, which runs one refresh cycle.
//!    Results land in `AppState` signals and the page re-renders.

use dash_core::config::DateFilter;
use dash_core::{DashboardConfig, DashboardController, UiEvent};
use dash_ui::charts::JsMiniChartRenderer;
use dash_ui::components::{
    DashboardHeader, DateFilters, LastUpdate, LoadingOverlay, MonthlyResults, RefreshButton,
    SummaryCards, Toasts,
};
use dash_ui::source::HttpDataSource;
use dash_ui::state::AppState;
use dioxus::prelude::*;
use std::rc::Rc;

/// Page layout and endpoint settings.
const CONFIG_JSON: &str = include_str!("../dashboard.json");

type Controller = DashboardController<HttpDataSource, AppState, JsMiniChartRenderer>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

fn load_config() -> DashboardConfig {
    match DashboardConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            DashboardConfig::default()
        }
    }
}

/// Run a controller event in the background and log how it ended.
fn dispatch(controller: Rc<Controller>, event: UiEvent) {
    spawn(async move {
        let outcome = controller.handle_event(event).await;
        log::info!("Refresh finished: {:?}", outcome);
    });
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let state = use_context_provider(|| AppState::new(config.notification_timeout_ms));

    // Built once per page; binds triggers and requests the mini charts
    let controller = use_hook(|| {
        Rc::new(DashboardController::new(
            config.clone(),
            HttpDataSource,
            state,
            JsMiniChartRenderer,
        ))
    });

    let page = controller.config().page.clone();
    let trigger = controller.refresh_binding().cloned();
    let filters: Vec<DateFilter> = controller
        .filter_bindings()
        .map(|b| DateFilter {
            id: b.element_id.clone(),
            label: b.label.clone(),
        })
        .collect();

    let on_refresh = {
        let controller = controller.clone();
        let event = trigger.as_ref().map(|b| b.ui_event());
        move |_: ()| {
            if let Some(event) = event.clone() {
                dispatch(controller.clone(), event);
            }
        }
    };

    let on_filter = {
        let controller = controller.clone();
        move |filter_id: String| match controller.binding(&filter_id) {
            Some(binding) => dispatch(controller.clone(), binding.ui_event()),
            None => log::warn!("Change on unbound element {}", filter_id),
        }
    };

    let server_time = state
        .data
        .read()
        .as_ref()
        .and_then(|d| d.server_timestamp.clone())
        .map(|ts| format!("Datos generados: {}", ts))
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Toasts {}
            LoadingOverlay {}

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                DashboardHeader {
                    title: "Dashboard Ejecutivo".to_string(),
                    subtitle: server_time,
                }
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    if let Some(target) = page.last_update_target.clone() {
                        LastUpdate { id: target }
                    }
                    if let Some(binding) = trigger {
                        RefreshButton {
                            id: binding.element_id,
                            label: binding.label,
                            onclick: on_refresh,
                        }
                    }
                }
            }

            if !filters.is_empty() {
                DateFilters {
                    filters: filters,
                    onchange: on_filter,
                }
            }

            SummaryCards { mini_charts: page.mini_charts.clone() }
            MonthlyResults {}
        }
    }
}
