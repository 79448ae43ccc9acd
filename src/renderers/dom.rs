//! DOM rendering adapter
//!
//! Builds the chart cell as real DOM nodes and appends it to a
//! caller-supplied table row. This is the only place the crate mutates the
//! page; everything upstream is pure computation. Appends to the same row
//! from concurrent callers must be serialized by the caller.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::html_layout::{RenderBar, RenderChart};

/// Renderer that mounts display lists into the document
pub struct DomChartRenderer {
    document: Document,
}

impl DomChartRenderer {
    /// Create a renderer bound to the current window's document
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window available"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        Ok(Self { document })
    }

    /// Create a renderer for an explicit document (e.g. in tests)
    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    /// Build a `<td>` holding the chart and append it to `row`.
    ///
    /// Returns the created cell so callers can attach listeners or ids.
    pub fn append_to_row(&self, row: &Element, chart: &RenderChart) -> Result<Element, JsValue> {
        let cell = self.document.create_element("td")?;

        let chart_box = self.document.create_element("div")?;
        chart_box.set_class_name(&chart.classes.join(" "));
        if let Some(title) = &chart.title {
            chart_box.set_attribute("title", title)?;
        }

        for bar in &chart.bars {
            chart_box.append_child(&self.create_bar(bar)?.into())?;
        }

        cell.append_child(&chart_box)?;
        row.append_child(&cell)?;
        Ok(cell)
    }

    fn create_bar(&self, bar: &RenderBar) -> Result<Element, JsValue> {
        let bar_el = self.document.create_element("div")?;
        bar_el.set_class_name(&bar.classes.join(" "));
        bar_el.set_attribute("style", &format!("width: {}", bar.width))?;
        bar_el.set_attribute("title", &bar.title)?;

        // Filler child keeps the border visible at small widths
        let border = self.document.create_element("div")?;
        border.set_class_name("bar-box-border");
        border.set_inner_html("&nbsp;");
        bar_el.append_child(&border)?;

        Ok(bar_el)
    }
}
