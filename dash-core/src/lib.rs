//! Controller and data model for the accounting dashboard page.
//!
//! This crate has no browser dependency. The page-specific pieces (HTTP,
//! timers, chart hooks, rendering) are injected through the traits in
//! [`controller`], so the refresh cycle can be exercised natively in tests.
//!
//! # Modules
//!
//! - `response`: decoding and validation of `/api/dashboard-data` bodies
//! - `controller`: `DashboardController` and its capability traits
//! - `notification`: toast notifications with id-based dismissal
//! - `loader`: the shared loading overlay state
//! - `locale`: es-ES time and number formatting
//! - `config`: page markup and endpoint configuration
//!
//! # Usage
//!
//! ```rust
//! use dash_core::response::RefreshResponse;
//!
//! let body = r#"{"success": false, "error": "No autorizado"}"#;
//! let response = RefreshResponse::decode(body).unwrap();
//! assert!(!response.is_success());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod locale;
pub mod notification;
pub mod response;

pub use config::DashboardConfig;
pub use controller::{DashboardController, RefreshOutcome, UiEvent};
pub use error::{DashError, Result};
