//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map glue and D3 chart functions live in `assets/js/*.js`, embedded
//! at compile time. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`; this module provides safe Rust wrappers that
//! serialize data and call those globals. D3 and MapLibre themselves are
//! loaded from script tags, so every entry point waits for the globals
//! with a polling loop.

use ofw_core::subset::BoundingBox;

// Embed the bridge JS files at compile time
static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OFW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Initialize bridge scripts with a wait-for-libraries polling loop.
///
/// The JS files define their functions via `function` declarations. To
/// make them globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope via indirect eval once
/// both `d3` and `maplibregl` exist, then promoted to `window.*`.
pub fn init_scripts() {
    let all_js = [MAP_BRIDGE_JS, LINE_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__ofwBridgeScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ofwScriptsReady || window.__ofwScriptsPolling) return;
            window.__ofwScriptsPolling = true;
            var wait = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof maplibregl !== 'undefined') {
                    clearInterval(wait);
                    (0, eval)(window.__ofwBridgeScripts);
                    delete window.__ofwBridgeScripts;
                    if (typeof initFlowMap !== 'undefined') window.initFlowMap = initFlowMap;
                    if (typeof setWhaleData !== 'undefined') window.setWhaleData = setWhaleData;
                    if (typeof setLayerVisibility !== 'undefined') window.setLayerVisibility = setLayerVisibility;
                    if (typeof setCirclePaint !== 'undefined') window.setCirclePaint = setCirclePaint;
                    if (typeof setCurrentsData !== 'undefined') window.setCurrentsData = setCurrentsData;
                    if (typeof setEnvOverlay !== 'undefined') window.setEnvOverlay = setEnvOverlay;
                    if (typeof clearEnvOverlay !== 'undefined') window.clearEnvOverlay = clearEnvOverlay;
                    if (typeof mapFlyTo !== 'undefined') window.mapFlyTo = mapFlyTo;
                    if (typeof mapFitBounds !== 'undefined') window.mapFitBounds = mapFitBounds;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof setMonthMarker !== 'undefined') window.setMonthMarker = setMonthMarker;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__ofwScriptsReady = true;
                    console.log('OFW bridge initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Create the page's map once the bridge scripts and container exist.
///
/// `config` carries center/zoom/pitch, layer styling, and whether click
/// popups are wanted; see `assets/js/map-bridge.js`.
pub fn init_map(container_id: &str, config: &serde_json::Value) {
    let escaped_config = escape_for_js(&config.to_string());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ofwScriptsReady &&
                    typeof window.initFlowMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initFlowMap('{container_id}', '{escaped_config}');
                    }} catch(e) {{ console.error('[OFW] initFlowMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn call_bridge_with_json(function: &str, json: &str) {
    let escaped = escape_for_js(json);
    call_js(&format!(
        "if (window.{function}) window.{function}('{escaped}');"
    ));
}

/// Push a FeatureCollection into the whale layer's source.
pub fn set_whale_data(geojson: &serde_json::Value) {
    call_bridge_with_json("setWhaleData", &geojson.to_string());
}

/// Toggle a map layer on or off. No-op while the layer does not exist.
pub fn set_layer_visibility(layer_id: &str, visible: bool) {
    call_js(&format!(
        "if (window.setLayerVisibility) window.setLayerVisibility('{layer_id}', {visible});"
    ));
}

/// Replace a circle layer's paint property with an expression.
pub fn set_circle_paint(layer_id: &str, property: &str, expression: &serde_json::Value) {
    let escaped = escape_for_js(&expression.to_string());
    call_js(&format!(
        "if (window.setCirclePaint) window.setCirclePaint('{layer_id}', '{property}', '{escaped}');"
    ));
}

/// Push the current month's flow samples into the currents layer.
pub fn set_currents_data(geojson: &serde_json::Value) {
    call_bridge_with_json("setCurrentsData", &geojson.to_string());
}

/// Render the environmental grid with a ready-built paint expression.
pub fn set_env_overlay(geojson: &serde_json::Value, paint: &serde_json::Value) {
    let escaped_data = escape_for_js(&geojson.to_string());
    let escaped_paint = escape_for_js(&paint.to_string());
    call_js(&format!(
        "if (window.setEnvOverlay) window.setEnvOverlay('{escaped_data}', '{escaped_paint}');"
    ));
}

/// Remove the environmental overlay layer and its source.
pub fn clear_env_overlay() {
    call_js("if (window.clearEnvOverlay) window.clearEnvOverlay();");
}

/// Fly the camera to a point.
pub fn fly_to(lon: f64, lat: f64, zoom: f64) {
    call_js(&format!(
        "if (window.mapFlyTo) window.mapFlyTo({lon}, {lat}, {zoom});"
    ));
}

/// Fit the camera to a bounding box.
pub fn fit_bounds(bounds: &BoundingBox) {
    call_js(&format!(
        "if (window.mapFitBounds) window.mapFitBounds({}, {}, {}, {});",
        bounds.min_lon, bounds.min_lat, bounds.max_lon, bounds.max_lat
    ));
}

/// Current map viewport (updated by the bridge on load and moveend).
/// `None` until the map has loaded.
pub fn viewport_bounds() -> Option<BoundingBox> {
    let value =
        js_sys::eval("window.__ofwMapBounds ? JSON.stringify(window.__ofwMapBounds) : null")
            .ok()?;
    let json = value.as_string()?;
    serde_json::from_str(&json).ok()
}

fn render_chart(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_for_js(data_json);
    let escaped_config = escape_for_js(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ofwScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[OFW] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a line chart (seasonality, monthly means).
///
/// Uses a polling loop to wait for D3, the bridge scripts, and the
/// container DOM element before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderLineChart", container_id, data_json, config_json);
}

/// Render a horizontal bar chart (top species).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderBarChart", container_id, data_json, config_json);
}

/// Move the red month marker on an already-rendered line chart.
pub fn set_month_marker(container_id: &str, month_index: i32) {
    call_js(&format!(
        "if (window.setMonthMarker) window.setMonthMarker('{container_id}', {month_index});"
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
