//! GDP bar chart.

use super::axis::{Axis, Orient, write_axis};
use super::svg::{SvgWriter, num};
use crate::domain::{ChartKind, GdpPoint, Layout};
use crate::scale::GdpScales;
use crate::scale::ticks::format_thousands;

const TICK_COUNT: usize = 10;

/// Tooltip line for one quarter.
pub fn gdp_tooltip(point: &GdpPoint) -> String {
    format!("GDP: {} | date: {}", point.value, point.x)
}

/// Render the bar chart as a standalone SVG document.
///
/// `caption` (usually the dataset's source line) is printed under the x axis.
pub fn render_gdp_chart(points: &[GdpPoint], scales: &GdpScales, layout: &Layout, caption: Option<&str>) -> String {
    let mut w = SvgWriter::new();
    open_canvas(&mut w, layout);

    w.text(
        "text",
        &[
            ("id", "title".to_string()),
            ("x", num(layout.width / 2.0)),
            ("y", num(layout.padding / 2.0)),
            ("text-anchor", "middle".to_string()),
            ("font-size", "24".to_string()),
        ],
        ChartKind::Gdp.display_name(),
    );

    let x_ticks = scales
        .x
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|t| (scales.x.map(t.value), t.label))
        .collect();
    write_axis(
        &mut w,
        &Axis {
            id: "x-axis",
            orient: Orient::Bottom,
            translate: (0.0, layout.height - layout.padding),
            range: scales.x.range(),
            ticks: x_ticks,
        },
    );

    let y_ticks = scales
        .y
        .ticks(TICK_COUNT, format_thousands)
        .into_iter()
        .map(|t| (scales.y.map(t.value), t.label))
        .collect();
    write_axis(
        &mut w,
        &Axis {
            id: "y-axis",
            orient: Orient::Left,
            translate: (layout.padding, 0.0),
            range: scales.y.range(),
            ticks: y_ticks,
        },
    );

    w.text(
        "text",
        &[
            ("class", "axis-label".to_string()),
            ("transform", "rotate(-90)".to_string()),
            ("x", num(-layout.height / 2.0)),
            ("y", num(layout.padding + 20.0)),
            ("text-anchor", "middle".to_string()),
        ],
        "Gross Domestic Product (billions of dollars)",
    );

    if let Some(caption) = caption {
        w.text(
            "text",
            &[
                ("id", "source".to_string()),
                ("x", num(layout.width - layout.padding)),
                ("y", num(layout.height - layout.padding / 4.0)),
                ("text-anchor", "end".to_string()),
                ("font-size", "11".to_string()),
            ],
            caption,
        );
    }

    let baseline = scales.y.map(0.0);
    w.open("g", &[("class", "bars".to_string())]);
    for point in points {
        let y = scales.y.map(point.value);
        // Negative values hang below the baseline instead of producing a negative height.
        let (top, height) = if y <= baseline { (y, baseline - y) } else { (baseline, y - baseline) };
        let tooltip = gdp_tooltip(point);

        w.open(
            "rect",
            &[
                ("class", "bar".to_string()),
                ("fill", "black".to_string()),
                ("data-date", point.original.date_str().to_string()),
                ("data-gdp", point.value.to_string()),
                ("data-tooltip", tooltip.clone()),
                ("x", num(scales.x.map(point.x))),
                ("y", num(top)),
                ("width", num(layout.bar_width)),
                ("height", num(height)),
            ],
        );
        w.text("title", &[], &tooltip);
        w.close("rect");
    }
    w.close("g");

    w.close("svg");
    w.finish()
}

pub(super) fn open_canvas(w: &mut SvgWriter, layout: &Layout) {
    w.open(
        "svg",
        &[
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
            ("id", "dat-viz".to_string()),
            ("width", num(layout.width)),
            ("height", num(layout.height)),
            ("viewBox", format!("0 0 {} {}", num(layout.width), num(layout.height))),
            ("font-family", "sans-serif".to_string()),
            ("font-size", "10".to_string()),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gdp::{GdpRecord, transform_gdp};
    use serde_json::json;

    fn sample() -> Vec<GdpPoint> {
        transform_gdp(&[
            GdpRecord("1947-01-01".to_string(), json!(243.1)),
            GdpRecord("1981-01-01".to_string(), json!("3000")),
            GdpRecord("2015-07-01".to_string(), json!(18064.7)),
        ])
        .unwrap()
    }

    #[test]
    fn one_bar_per_point_in_order() {
        let points = sample();
        let layout = Layout::GDP;
        let scales = GdpScales::build(&points, &layout).unwrap();
        let svg = render_gdp_chart(&points, &scales, &layout, None);

        assert_eq!(svg.matches("class=\"bar\"").count(), 3);
        let first = svg.find("data-date=\"1947-01-01\"").unwrap();
        let second = svg.find("data-date=\"1981-01-01\"").unwrap();
        let third = svg.find("data-date=\"2015-07-01\"").unwrap();
        assert!(first < second && second < third);
        assert!(svg.contains("data-gdp=\"243.1\""));
        assert!(svg.contains("<title>GDP: 18064.7 | date: 2015-07-01</title>"));
    }

    #[test]
    fn tallest_bar_reaches_top_padding() {
        let points = sample();
        let layout = Layout::GDP;
        let scales = GdpScales::build(&points, &layout).unwrap();
        let svg = render_gdp_chart(&points, &scales, &layout, None);

        // max value: y = padding, height = height - 2 * padding
        assert!(svg.contains("x=\"720\" y=\"80\" width=\"10\" height=\"260\""), "{svg}");
        // first bar starts at the left padding
        assert!(svg.contains("x=\"80\" y=\""));
    }

    #[test]
    fn negative_bars_hang_from_the_zero_line() {
        let points = transform_gdp(&[
            GdpRecord("2009-01-01".to_string(), json!(-100.0)),
            GdpRecord("2009-04-01".to_string(), json!(-50.0)),
        ])
        .unwrap();
        let layout = Layout::GDP;
        let scales = GdpScales::build(&points, &layout).unwrap();
        let svg = render_gdp_chart(&points, &scales, &layout, None);

        // zero sits at the top padding; the deepest value reaches the bottom padding
        assert!(svg.contains("x=\"80\" y=\"80\" width=\"10\" height=\"260\""), "{svg}");
        assert!(svg.contains("x=\"720\" y=\"80\" width=\"10\" height=\"130\""), "{svg}");
        assert!(!svg.contains("y=\"-"));
    }

    #[test]
    fn axes_and_caption() {
        let points = sample();
        let layout = Layout::GDP;
        let scales = GdpScales::build(&points, &layout).unwrap();
        let svg = render_gdp_chart(&points, &scales, &layout, Some("Source: BEA"));

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"dat-viz\""));
        assert!(svg.contains("<g id=\"x-axis\" class=\"axis\" transform=\"translate(0, 340)\">"));
        assert!(svg.contains("<g id=\"y-axis\" class=\"axis\" transform=\"translate(80, 0)\">"));
        assert!(svg.contains(">18,000</text>"));
        assert!(svg.contains(">1950</text>"));
        assert!(svg.contains(">Source: BEA</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
