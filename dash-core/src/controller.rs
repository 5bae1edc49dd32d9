//! The dashboard controller.
//!
//! `DashboardController` owns one refresh cycle: show the loader, fetch the
//! summary endpoint, apply the result to the view, notify, hide the loader.
//! Everything that touches the page is behind the three capability traits
//! below, injected at construction.

use crate::config::DashboardConfig;
use crate::error::{DashError, Result};
use crate::locale::{format_time_es, local_time_now};
use crate::notification::NotificationKind;
use crate::response::{DashboardData, RefreshResponse, GENERIC_FAILURE};
use async_trait::async_trait;
use std::cell::Cell;

/// Notification text after a successful refresh.
pub const SUCCESS_MESSAGE: &str = "Datos actualizados correctamente";

/// Caption of the refresh trigger.
pub const REFRESH_LABEL: &str = "Actualizar";

/// Fetches the raw body of the summary endpoint.
#[async_trait(?Send)]
pub trait DataSource {
    async fn fetch_body(&self, endpoint: &str) -> Result<String>;
}

/// The page surface the controller writes to.
pub trait DashboardView {
    fn set_loading(&self, show: bool);
    fn set_last_update(&self, target_id: &str, text: String);
    fn update_summary(&self, data: &DashboardData);
    fn show_notification(&self, message: String, kind: NotificationKind);
}

/// Draws the small charts inside the summary cards.
pub trait ChartRenderer {
    fn create_mini_chart(&self, container_id: &str);
}

/// Renderer for pages without a charting library.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChartRenderer;

impl ChartRenderer for NoopChartRenderer {
    fn create_mini_chart(&self, container_id: &str) {
        log::debug!("No chart renderer for {}", container_id);
    }
}

/// User actions that start a refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    RefreshClicked,
    FilterChanged { filter_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    Click,
    Change,
}

/// An event handler registered on a page element during construction.
///
/// The page renders its interactive elements from these, so an element the
/// controller did not bind never appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub event: DomEvent,
    pub label: String,
}

impl Binding {
    /// The controller event this element fires.
    pub fn ui_event(&self) -> UiEvent {
        match self.event {
            DomEvent::Click => UiEvent::RefreshClicked,
            DomEvent::Change => UiEvent::FilterChanged {
                filter_id: self.element_id.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Updated,
    /// The refresh failed; carries the message shown to the user.
    Failed(String),
    /// Another refresh was already in flight.
    Skipped,
}

/// Hides the loader when dropped, so every exit path of a refresh
/// (including a panic in the view) hides it exactly once.
struct LoadingGuard<'a, V: DashboardView> {
    view: &'a V,
}

impl<'a, V: DashboardView> LoadingGuard<'a, V> {
    fn show(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: DashboardView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct DashboardController<S, V, C> {
    config: DashboardConfig,
    source: S,
    view: V,
    charts: C,
    bindings: Vec<Binding>,
    in_flight: Cell<bool>,
}

impl<S, V, C> DashboardController<S, V, C>
where
    S: DataSource,
    V: DashboardView,
    C: ChartRenderer,
{
    /// Bind the page's triggers and draw its mini charts.
    ///
    /// Missing elements are skipped; a page with none of them is valid.
    pub fn new(config: DashboardConfig, source: S, view: V, charts: C) -> Self {
        let mut controller = Self {
            config,
            source,
            view,
            charts,
            bindings: Vec::new(),
            in_flight: Cell::new(false),
        };
        controller.init_event_listeners();
        controller.init_mini_charts();
        controller
    }

    fn init_event_listeners(&mut self) {
        let page = &self.config.page;
        if let Some(trigger) = &page.refresh_trigger {
            self.bindings.push(Binding {
                element_id: trigger.clone(),
                event: DomEvent::Click,
                label: REFRESH_LABEL.to_string(),
            });
        }
        for filter in &page.date_filters {
            self.bindings.push(Binding {
                element_id: filter.id.clone(),
                event: DomEvent::Change,
                label: filter.label.clone(),
            });
        }
        log::debug!("Bound {} dashboard event handlers", self.bindings.len());
    }

    fn init_mini_charts(&self) {
        for container_id in &self.config.page.mini_charts {
            self.charts.create_mini_chart(container_id);
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn binding(&self, element_id: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.element_id == element_id)
    }

    pub fn refresh_binding(&self) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.event == DomEvent::Click)
    }

    pub fn filter_bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(|b| b.event == DomEvent::Change)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn handle_event(&self, event: UiEvent) -> RefreshOutcome {
        match event {
            UiEvent::RefreshClicked => self.refresh_data().await,
            UiEvent::FilterChanged { filter_id } => {
                log::debug!("Date filter {} changed", filter_id);
                self.apply_filters().await
            }
        }
    }

    /// Filters are not sent to the endpoint; a change reloads everything.
    pub async fn apply_filters(&self) -> RefreshOutcome {
        self.refresh_data().await
    }

    /// Run one refresh cycle.
    pub async fn refresh_data(&self) -> RefreshOutcome {
        if self.config.single_flight && self.in_flight.get() {
            log::debug!("Refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        }
        let _flight = InFlight::enter(&self.in_flight);
        let _loading = LoadingGuard::show(&self.view);

        match self.fetch().await {
            Ok(data) => {
                self.update_ui(&data);
                self.view
                    .show_notification(SUCCESS_MESSAGE.to_string(), NotificationKind::Success);
                RefreshOutcome::Updated
            }
            Err(e) => {
                log::error!("Dashboard refresh failed: {}", e);
                let message = format!("{}: {}", GENERIC_FAILURE, e);
                self.view
                    .show_notification(message.clone(), NotificationKind::Danger);
                RefreshOutcome::Failed(message)
            }
        }
    }

    async fn fetch(&self) -> Result<DashboardData> {
        let body = self.source.fetch_body(&self.config.endpoint).await?;
        match RefreshResponse::decode(&body)? {
            RefreshResponse::Success(data) => Ok(data),
            RefreshResponse::Failure { message } => Err(DashError::Reported(message)),
        }
    }

    fn update_ui(&self, data: &DashboardData) {
        match &self.config.page.last_update_target {
            Some(target) => self
                .view
                .set_last_update(target, format_time_es(local_time_now())),
            None => log::debug!("No last-update element on page"),
        }
        self.view.update_summary(data);
    }
}
