//! Browser `ChartRenderer` that hands mini charts to a page-level JS hook.

use crate::js_bridge;
use dash_core::controller::ChartRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsMiniChartRenderer;

impl ChartRenderer for JsMiniChartRenderer {
    fn create_mini_chart(&self, container_id: &str) {
        log::debug!("Requesting mini chart for {}", container_id);
        js_bridge::render_mini_chart(container_id);
    }
}
