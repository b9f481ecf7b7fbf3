//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the pipeline stays free of presentation details
//! - output changes are localized (and easy to pin in tests)

use crate::color::Legend;
use crate::data::GdpDocument;
use crate::domain::{ChartConfig, GdpPoint, Layout, RacePoint};
use crate::scale::extent;

/// Summary of a GDP run: dataset header, record stats and where the chart went.
pub fn format_gdp_summary(document: &GdpDocument, points: &[GdpPoint], config: &ChartConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== svgcharts - {} ===\n", config.kind.display_name()));
    if let Some(name) = &document.name {
        out.push_str(&format!("Dataset: {}\n", truncate(name, 72)));
    }
    out.push_str(&format!("Source: {}\n", config.source));
    if let (Some(from), Some(to)) = (&document.from_date, &document.to_date) {
        out.push_str(&format!("Declared range: {from} .. {to}\n"));
    }

    out.push_str(&format!("Records: n={}\n", points.len()));
    if let Some((first, last)) = extent(points.iter().map(|p| p.x)) {
        out.push_str(&format!("Dates: [{first}, {last}]\n"));
    }
    if let Some((lo, hi)) = extent(points.iter().map(|p| p.value)) {
        out.push_str(&format!("GDP: [{lo:.1}, {hi:.1}] | y-domain=[0.0, {hi:.1}]\n"));
    }

    out.push_str(&format_layout(&config.layout, Some(config.layout.bar_width), None));
    out.push_str(&format_output(config));
    out
}

/// Summary of a cyclist run, including the legend size and doping count.
pub fn format_cyclist_summary(points: &[RacePoint], legend: &Legend, config: &ChartConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== svgcharts - {} ===\n", config.kind.display_name()));
    out.push_str(&format!("Source: {}\n", config.source));

    let doping = points.iter().filter(|p| p.original.doping().is_some()).count();
    out.push_str(&format!("Records: n={} | doping allegations={doping}\n", points.len()));
    if let Some((y0, y1)) = extent(points.iter().map(|p| p.x)) {
        out.push_str(&format!("Years: [{y0}, {y1}]\n"));
    }
    if let Some((fastest, slowest)) = extent(points.iter().map(|p| p.value)) {
        out.push_str(&format!("Times: fastest={fastest} slowest={slowest}\n"));
    }

    out.push_str(&format!("Legend: {} categories", legend.len()));
    if !legend.is_empty() {
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        out.push_str(&format!(" ({})", truncate(&labels.join(", "), 60)));
    }
    out.push('\n');

    out.push_str(&format_layout(&config.layout, None, Some(config.layout.dot_radius)));
    out.push_str(&format_output(config));
    out
}

fn format_layout(layout: &Layout, bar_width: Option<f64>, dot_radius: Option<f64>) -> String {
    let mut line = format!("Canvas: {}x{} | padding={}", layout.width, layout.height, layout.padding);
    if let Some(w) = bar_width {
        line.push_str(&format!(" | bar-width={w}"));
    }
    if let Some(r) = dot_radius {
        line.push_str(&format!(" | dot-radius={r}"));
    }
    line.push('\n');
    line
}

fn format_output(config: &ChartConfig) -> String {
    let mut out = format!("Output: {} ({})\n", config.output.display(), config.format.extension());
    if let Some(path) = &config.export {
        out.push_str(&format!("Export: {}\n", path.display()));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
