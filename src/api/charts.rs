//! Bar chart API operations

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::api::helpers;
use crate::chart::BarChart;
use crate::html_layout::{ChartStyleBuilder, RenderChart};
use crate::models::ResultCounts;
use crate::renderers::{render_chart_cell, DomChartRenderer};
use crate::{wasm_error, wasm_log};

/// Render a proportional bar for the given counts and append it to `row`
/// as a new table cell. Returns the created cell.
///
/// `missing` may be omitted from JavaScript and defaults to 0.
#[wasm_bindgen(js_name = addBarChart)]
pub fn add_bar_chart(
    row: &Element,
    ok: f64,
    error: f64,
    missing: Option<f64>,
) -> Result<Element, JsValue> {
    let render = build_display_chart(ok, error, missing)?;
    let cell = DomChartRenderer::new()?.append_to_row(row, &render)?;
    wasm_log!(
        "addBarChart: ok={}, error={}, missing={:?} -> {} bar(s)",
        ok,
        error,
        missing,
        render.bars.len()
    );
    Ok(cell)
}

/// Compute the chart display list for a counts object
/// (`{ok, error, missing?}`) without touching the DOM. The caller renders
/// the returned structure itself.
#[wasm_bindgen(js_name = computeBarChart)]
pub fn compute_bar_chart(counts: JsValue) -> Result<JsValue, JsValue> {
    let counts: ResultCounts = helpers::deserialize(counts, "Failed to parse result counts")?;
    let chart = BarChart::from_counts(&counts);
    let render = ChartStyleBuilder::new().build_render_chart(&chart);
    helpers::serialize(&render, "Failed to serialize bar chart")
}

/// Render the chart cell as an HTML string (`<td>…</td>`)
#[wasm_bindgen(js_name = barChartHtml)]
pub fn bar_chart_html(ok: f64, error: f64, missing: Option<f64>) -> Result<String, JsValue> {
    let render = build_display_chart(ok, error, missing)?;
    Ok(render_chart_cell(&render))
}

fn build_display_chart(
    ok: f64,
    error: f64,
    missing: Option<f64>,
) -> Result<RenderChart, JsValue> {
    let counts = ResultCounts::new(ok, error, missing).map_err(|e| {
        wasm_error!("Invalid counts: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    let chart = BarChart::from_counts(&counts);
    Ok(ChartStyleBuilder::new().build_render_chart(&chart))
}
