//! HTML string rendering
//!
//! Emits the chart cell as literal markup, matching the structure the DOM
//! adapter builds: a `<td>` wrapping the bar box, one `<div>` per bar, and
//! the `bar-box-border` filler inside each bar.

use crate::html_layout::{RenderBar, RenderChart};

/// Render a complete `<td>` cell for the given chart
pub fn render_chart_cell(chart: &RenderChart) -> String {
    format!("<td>{}</td>", render_chart_box(chart))
}

/// Render the outer bar box with its bars, without the enclosing cell
pub fn render_chart_box(chart: &RenderChart) -> String {
    let mut html = String::from("<div class=\"");
    html.push_str(&chart.classes.join(" "));
    html.push('"');
    if let Some(title) = &chart.title {
        html.push_str(&format!(" title=\"{}\"", title));
    }
    html.push('>');

    for bar in &chart.bars {
        html.push_str(&render_bar(bar));
    }

    html.push_str("</div>");
    html
}

fn render_bar(bar: &RenderBar) -> String {
    format!(
        "<div class=\"{}\" style=\"width: {}\" title=\"{}\"><div class=\"bar-box-border\">&nbsp;</div></div>",
        bar.classes.join(" "),
        bar.width,
        bar.title,
    )
}
