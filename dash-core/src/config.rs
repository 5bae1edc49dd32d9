//! Dashboard configuration.
//!
//! Describes the endpoint, timing, and which optional page elements exist.
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::{DashError, Result};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "/api/dashboard-data";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_REFRESH_TRIGGER: &str = "refresh-btn";
pub const DEFAULT_LAST_UPDATE_TARGET: &str = "last-update";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Summary endpoint, fetched with a plain GET.
    pub endpoint: String,
    /// Delay before a notification removes itself.
    pub notification_timeout_ms: u32,
    /// Ignore refresh triggers while a refresh is already in flight.
    pub single_flight: bool,
    pub page: PageMarkup,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            single_flight: true,
            page: PageMarkup::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DashError::Config(e.to_string()))
    }
}

/// Optional elements present on the page. Any of them may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageMarkup {
    pub refresh_trigger: Option<String>,
    pub date_filters: Vec<DateFilter>,
    pub last_update_target: Option<String>,
    /// Container ids of the small charts inside the summary cards.
    pub mini_charts: Vec<String>,
}

impl Default for PageMarkup {
    fn default() -> Self {
        Self {
            refresh_trigger: Some(DEFAULT_REFRESH_TRIGGER.to_string()),
            date_filters: Vec::new(),
            last_update_target: Some(DEFAULT_LAST_UPDATE_TARGET.to_string()),
            mini_charts: Vec::new(),
        }
    }
}

impl PageMarkup {
    /// A page with none of the optional elements.
    pub fn empty() -> Self {
        Self {
            refresh_trigger: None,
            date_filters: Vec::new(),
            last_update_target: None,
            mini_charts: Vec::new(),
        }
    }
}

/// A date input whose change triggers a refresh.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateFilter {
    pub id: String,
    #[serde(default)]
    pub label: String,
}
