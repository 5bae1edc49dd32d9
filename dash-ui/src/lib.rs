//! Dioxus components and browser bindings for the accounting dashboard.
//!
//! This crate provides:
//! - `js_bridge`: fetch, timers and the mini-chart hook via `web-sys`/`js-sys`
//! - `source`: `HttpDataSource`, the browser implementation of `DataSource`
//! - `charts`: `JsMiniChartRenderer`, the browser implementation of `ChartRenderer`
//! - `state`: Reactive AppState with Dioxus Signals, implementing `DashboardView`
//! - `components`: Reusable RSX components (toasts, loader, filters, cards)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod source;
pub mod state;
