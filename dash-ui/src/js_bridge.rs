//! Browser interop via `web-sys`, `js-sys` and `js_sys::eval()`.
//!
//! Network access and timers go through typed `web-sys` bindings. The
//! mini-chart hook is an optional page global (`window.renderMiniChart`),
//! reached through `eval` the same way other page scripts are.

use async_trait::async_trait;
use dash_core::notification::Timer;
use dash_core::{DashError, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// How many times to poll for the mini-chart hook before giving up.
const MINI_CHART_POLL_ATTEMPTS: u32 = 50;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// GET `url` and return the body as text, whatever the HTTP status.
///
/// Only a failed request (network down, CORS, aborted) is an error; error
/// statuses still carry a JSON body the caller wants to read.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| DashError::Transport("no window".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;
    log::debug!("GET {} -> {}", url, resp.status());

    let text = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    text.as_string()
        .ok_or_else(|| DashError::Transport("response body is not text".into()))
}

/// Resolve after `ms` milliseconds, via `window.setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// `Timer` backed by `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep_ms(&self, ms: u32) {
        sleep_ms(ms).await;
    }
}

/// Draw a mini chart into `container_id` if the page provides a
/// `window.renderMiniChart(id)` hook.
///
/// Polls until both the hook and the container exist, then stops. Pages
/// without a charting library never define the hook and the poll expires.
pub fn render_mini_chart(container_id: &str) {
    call_js(&mini_chart_script(container_id));
}

fn mini_chart_script(container_id: &str) -> String {
    // JSON string literals are valid JS string literals
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts++;
                if (typeof window.renderMiniChart === 'function' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.renderMiniChart({id_literal});
                    }} catch(e) {{ console.error('[Dashboard] renderMiniChart error:', e); }}
                }} else if (attempts >= {MINI_CHART_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Turn a rejected promise value into a readable transport error.
fn transport_error(value: JsValue) -> DashError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    DashError::Transport(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mini_chart_script_quotes_id() {
        let script = mini_chart_script("mini-ventas");
        assert!(script.contains(r#"document.getElementById("mini-ventas")"#));
        assert!(script.contains(r#"window.renderMiniChart("mini-ventas");"#));
    }

    #[test]
    fn test_mini_chart_script_escapes_special_characters() {
        let script = mini_chart_script("a\\b'c\"d\ne");
        assert!(script.contains(r#"window.renderMiniChart("a\\b'c\"d\ne");"#));
        assert!(!script.contains("d\ne"));
    }
}
