//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals, plus the reverse channel: heatmap cell clicks
//! re-enter Rust through a `wasm_bindgen` closure parked on
//! `window.__fceCellClick`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HEATMAP_CHART_JS: &str = include_str!("../assets/js/heatmap-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FCE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderHeatmap(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, HEATMAP_CHART_JS, PIE_CHART_JS, LINE_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__fceChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__fceChartScripts);
                    delete window.__fceChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderHeatmap !== 'undefined') window.renderHeatmap = renderHeatmap;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__fceChartsReady = true;
                    console.log('FCE charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Install the Rust handler invoked when a heatmap cell is clicked.
///
/// The heatmap script calls `window.__fceCellClick(country, year)`; the
/// closure is leaked on purpose so it lives for the whole session.
pub fn set_cell_click_handler<F>(mut handler: F)
where
    F: FnMut(String, i32) + 'static,
{
    let closure = Closure::wrap(Box::new(move |country: String, year: f64| {
        handler(country, year as i32);
    }) as Box<dyn FnMut(String, f64)>);

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    if js_sys::Reflect::set(
        &window,
        &JsValue::from_str("__fceCellClick"),
        closure.as_ref().unchecked_ref(),
    )
    .is_err()
    {
        log::error!("failed to install heatmap cell click handler");
    }
    closure.forget();
}

fn render_chart(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__fceChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[FCE] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the grid heatmap.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderHeatmap", container_id, data_json, config_json);
}

/// Render the category breakdown pie chart.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderPieChart", container_id, data_json, config_json);
}

/// Render the emission/GDP trend line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_chart("renderLineChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
