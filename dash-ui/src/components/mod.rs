//! Reusable Dioxus RSX components for the dashboard page.

mod dashboard_header;
mod date_filters;
mod last_update;
mod loading_overlay;
mod mini_chart;
mod monthly_results;
mod refresh_button;
mod summary_cards;
mod toasts;

pub use dashboard_header::DashboardHeader;
pub use date_filters::DateFilters;
pub use last_update::LastUpdate;
pub use loading_overlay::LoadingOverlay;
pub use mini_chart::MiniChart;
pub use monthly_results::MonthlyResults;
pub use refresh_button::RefreshButton;
pub use summary_cards::SummaryCards;
pub use toasts::Toasts;
