//! Cyclist scatter plot, one dot per ascent colored by nationality.

use super::axis::{Axis, Orient, write_axis};
use super::bar::open_canvas;
use super::svg::{SvgWriter, num};
use crate::color::{Colorizer, Legend};
use crate::domain::{ChartKind, Layout, RacePoint};
use crate::scale::RaceScales;
use crate::scale::ticks::format_plain;

const TICK_COUNT: usize = 10;
const LEGEND_ROW_HEIGHT: f64 = 20.0;
const SWATCH_SIZE: f64 = 12.0;

/// Tooltip text: name and nationality, year and time, then the doping note if any.
pub fn race_tooltip(point: &RacePoint) -> String {
    let record = &point.original;
    let mut text = format!(
        "{}: {}\nYear: {}, Time: {}",
        record.name().unwrap_or("Unknown rider"),
        record.nationality,
        point.x,
        point.value
    );
    if let Some(doping) = record.doping() {
        text.push_str("\n\n");
        text.push_str(doping);
    }
    text
}

pub fn render_cyclist_chart(
    points: &[RacePoint],
    scales: &RaceScales,
    colorizer: &Colorizer,
    legend: &Legend,
    layout: &Layout,
) -> String {
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
        ChartKind::Cyclist.display_name(),
    );

    let x_ticks = scales
        .x
        .ticks(TICK_COUNT, format_plain)
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
        .ticks(TICK_COUNT)
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
            ("y", num(layout.padding / 3.0)),
            ("text-anchor", "middle".to_string()),
        ],
        "Time in Minutes",
    );

    w.open("g", &[("class", "dots".to_string())]);
    for point in points {
        let tooltip = race_tooltip(point);
        w.open(
            "circle",
            &[
                ("class", "dot".to_string()),
                ("data-xvalue", point.x.to_string()),
                ("data-yvalue", point.value.to_datetime().format("%Y-%m-%dT%H:%M:%S").to_string()),
                ("data-tooltip", tooltip.clone()),
                ("cx", num(scales.x.map(f64::from(point.x)))),
                ("cy", num(scales.y.map(point.value))),
                ("r", num(layout.dot_radius)),
                ("fill", colorizer.color(&point.original.nationality).to_string()),
                ("stroke", "black".to_string()),
                ("fill-opacity", "0.8".to_string()),
            ],
        );
        w.text("title", &[], &tooltip);
        w.close("circle");
    }
    w.close("g");

    write_legend(&mut w, legend, layout);

    w.close("svg");
    w.finish()
}

fn write_legend(w: &mut SvgWriter, legend: &Legend, layout: &Layout) {
    w.open("g", &[("id", "legend".to_string())]);
    for (i, entry) in legend.entries.iter().enumerate() {
        let y = layout.padding + i as f64 * LEGEND_ROW_HEIGHT;
        w.open(
            "g",
            &[
                ("class", "legend-item".to_string()),
                ("transform", format!("translate({}, {})", num(layout.width - layout.padding), num(y))),
            ],
        );
        w.empty(
            "rect",
            &[
                ("x", num(-SWATCH_SIZE)),
                ("width", num(SWATCH_SIZE)),
                ("height", num(SWATCH_SIZE)),
                ("fill", entry.color.to_string()),
            ],
        );
        w.text(
            "text",
            &[
                ("x", num(-SWATCH_SIZE - 6.0)),
                ("y", num(SWATCH_SIZE - 2.0)),
                ("text-anchor", "end".to_string()),
            ],
            &entry.label,
        );
        w.close("g");
    }
    w.close("g");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::cyclist::{CyclistRecord, transform_cyclists};

    fn sample() -> Vec<RacePoint> {
        let records: Vec<CyclistRecord> = serde_json::from_str(
            r#"[
                {"Time":"36:50","Name":"Marco Pantani","Year":1995,"Nationality":"ITA","Doping":"Alleged drug use"},
                {"Time":"39:50","Name":"Rider <B>","Year":2015,"Nationality":"USA","Doping":""},
                {"Time":"37:36","Name":"Lance Armstrong","Year":2004,"Nationality":"USA","Doping":"Stripped of titles"}
            ]"#,
        )
        .unwrap();
        transform_cyclists(&records).unwrap()
    }

    fn render(points: &[RacePoint]) -> String {
        let layout = Layout::CYCLIST;
        let scales = RaceScales::build(points, &layout).unwrap();
        let colorizer = Colorizer::default();
        let legend = Legend::from_labels(points.iter().map(|p| p.original.nationality.as_str()), &colorizer);
        render_cyclist_chart(points, &scales, &colorizer, &legend, &layout)
    }

    #[test]
    fn tooltip_includes_doping_note() {
        let points = sample();
        assert_eq!(
            race_tooltip(&points[0]),
            "Marco Pantani: ITA\nYear: 1995, Time: 36:50\n\nAlleged drug use"
        );
        assert_eq!(race_tooltip(&points[1]), "Rider <B>: USA\nYear: 2015, Time: 39:50");
    }

    #[test]
    fn dots_carry_data_attributes_and_colors() {
        let svg = render(&sample());

        assert_eq!(svg.matches("class=\"dot\"").count(), 3);
        assert!(svg.contains("data-xvalue=\"1995\" data-yvalue=\"1970-01-01T00:36:50\""));
        assert!(svg.contains("fill=\"#38d4fd\""));
        assert!(svg.contains("fill=\"#3ba5e3\""));
        assert!(svg.contains("&lt;B&gt;"));
        assert!(!svg.contains("<B>"));
    }

    #[test]
    fn slowest_time_is_plotted_on_top() {
        let svg = render(&sample());
        // slowest (39:50) sits at the top padding, fastest (36:50) at the bottom edge
        assert!(svg.contains("cx=\"740\" cy=\"60\""), "{svg}");
        assert!(svg.contains("cx=\"60\" cy=\"440\""), "{svg}");
    }

    #[test]
    fn legend_lists_each_nationality_once() {
        let svg = render(&sample());
        let legend = &svg[svg.find("<g id=\"legend\">").unwrap()..];
        assert_eq!(legend.matches("class=\"legend-item\"").count(), 2);
        assert!(legend.find(">ITA</text>").unwrap() < legend.find(">USA</text>").unwrap());
    }
}
