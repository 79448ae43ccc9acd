// Display list structure: classes, style widths, and tooltip strings

use status_charts_wasm::{BarChart, ChartStyleBuilder, ResultCounts};

fn render(ok: u64, error: u64, missing: u64) -> status_charts_wasm::RenderChart {
    let chart = BarChart::from_counts(&ResultCounts { ok, error, missing });
    ChartStyleBuilder::new().build_render_chart(&chart)
}

#[test]
fn test_outer_box_classes_and_title() {
    let chart = render(90, 10, 0);
    assert_eq!(chart.classes, vec!["bar-box"]);
    assert_eq!(chart.title.as_deref(), Some("90%"));
}

#[test]
fn test_empty_state_gets_modifier_class_and_no_title() {
    let chart = render(0, 0, 0);
    assert_eq!(chart.classes, vec!["bar-box", "bar-empty"]);
    assert_eq!(chart.title, None);
    assert!(chart.bars.is_empty());
}

#[test]
fn test_error_bar_role_and_width() {
    let chart = render(90, 10, 0);
    assert_eq!(chart.bars.len(), 1);
    assert_eq!(chart.bars[0].classes, vec!["chart-bar", "bar-error"]);
    assert_eq!(chart.bars[0].width, "10%");
    assert_eq!(chart.bars[0].title, "10%");
}

#[test]
fn test_missing_bar_uses_warning_role() {
    let chart = render(50, 0, 50);
    assert_eq!(chart.bars[0].classes, vec!["chart-bar", "bar-warning"]);
    assert_eq!(chart.bars[0].width, "50%");
}

#[test]
fn test_bar_title_keeps_unsnapped_share() {
    let chart = render(97, 3, 0);
    assert_eq!(chart.bars[0].width, "5%");
    assert_eq!(chart.bars[0].title, "3%");
}

#[test]
fn test_display_list_serializes_for_js_consumers() {
    let chart = render(0, 2, 48);
    let json = serde_json::to_value(&chart).expect("display list should serialize");

    assert_eq!(json["title"], "0%");
    assert_eq!(json["bars"][0]["title"], "4%");
    assert_eq!(json["bars"][0]["classes"][1], "bar-error");
    assert_eq!(json["bars"][0]["width"], "5%");
    assert_eq!(json["bars"][1]["classes"][1], "bar-warning");
    assert_eq!(json["bars"][1]["width"], "95%");
}
