//! Browser-side HTTP helpers.
//!
//! Static GeoJSON/CSV/JSON assets are embedded at compile time, so the
//! only network traffic from the apps is the environmental subset API.
//! These helpers use the browser `fetch` API through `web_sys` rather
//! than a native HTTP client.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use ofw_core::subset::{SubsetError, SubsetGrid, SubsetParams, DEFAULT_BASE_URL};

/// Fetch a URL and return its body as text.
pub async fn fetch_text(url: &str) -> Result<String, SubsetError> {
    let window = web_sys::window()
        .ok_or_else(|| SubsetError::Decode("no window object".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| SubsetError::Decode(format!("fetch failed: {:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| SubsetError::Decode("fetch returned a non-Response value".to_string()))?;

    if !resp.ok() {
        return Err(SubsetError::Http {
            status: resp.status(),
            text: resp.status_text(),
        });
    }

    let text_value = JsFuture::from(
        resp.text()
            .map_err(|e| SubsetError::Decode(format!("body read failed: {:?}", e)))?,
    )
    .await
    .map_err(|e| SubsetError::Decode(format!("body read failed: {:?}", e)))?;

    text_value
        .as_string()
        .ok_or_else(|| SubsetError::Decode("response body was not text".to_string()))
}

/// Fetch an environmental grid from the subset API.
///
/// Validates parameters before touching the network, forces JSON output,
/// and decodes the grid. Errors are returned, never swallowed; callers
/// surface them in the UI or log them.
pub async fn fetch_subset_grid(params: &SubsetParams) -> Result<SubsetGrid, SubsetError> {
    params.validate()?;
    let url = params
        .clone()
        .with_fmt(ofw_core::subset::OutputFormat::Json)
        .to_url(DEFAULT_BASE_URL)?;
    log::info!("requesting subset grid: {}", url);
    let body = fetch_text(&url).await?;
    SubsetGrid::parse(&body).map_err(|e| SubsetError::Decode(e.to_string()))
}

/// Await a fixed delay, e.g. to let map movement settle before a fetch.
pub async fn pause_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
