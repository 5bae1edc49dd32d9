//! Browser `DataSource` backed by `window.fetch`.

use crate::js_bridge;
use async_trait::async_trait;
use dash_core::controller::DataSource;
use dash_core::Result;

/// Fetches the dashboard endpoint relative to the page origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDataSource;

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn fetch_body(&self, endpoint: &str) -> Result<String> {
        js_bridge::fetch_text(endpoint).await
    }
}
