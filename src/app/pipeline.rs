//! Shared chart pipeline used by every subcommand.
//!
//! Each chart runs the same stages:
//! fetch -> transform -> scales -> render -> write
//!
//! The `*_with_*` variants start from an already-decoded document, so tests and the
//! `all` command can skip the network.

use tracing::info;

use crate::color::{Colorizer, Legend};
use crate::data::{CyclistRecord, DatasetClient, GdpDocument, transform_cyclists, transform_gdp};
use crate::domain::{ChartConfig, GdpPoint, RacePoint};
use crate::error::AppError;
use crate::render::{finish_document, render_cyclist_chart, render_gdp_chart, write_output};
use crate::scale::{GdpScales, RaceScales};

/// All computed outputs of a GDP run.
#[derive(Debug, Clone)]
pub struct GdpRun {
    pub document: GdpDocument,
    pub points: Vec<GdpPoint>,
    pub scales: GdpScales,
    pub rendered: String,
}

/// All computed outputs of a cyclist run.
#[derive(Debug, Clone)]
pub struct CyclistRun {
    pub points: Vec<RacePoint>,
    pub scales: RaceScales,
    pub colorizer: Colorizer,
    pub legend: Legend,
    pub rendered: String,
}

pub fn run_gdp(config: &ChartConfig) -> Result<GdpRun, AppError> {
    let client = DatasetClient::new()?;
    let document: GdpDocument = client.fetch_json(&config.source)?;
    run_gdp_with_document(config, document)
}

/// Run the GDP pipeline on a pre-fetched document and write the chart.
pub fn run_gdp_with_document(config: &ChartConfig, document: GdpDocument) -> Result<GdpRun, AppError> {
    let points = transform_gdp(&document.data)?;
    let scales = GdpScales::build(&points, &config.layout)?;

    let caption = document.source_name.as_deref().map(|s| format!("Source: {s}"));
    let svg = render_gdp_chart(&points, &scales, &config.layout, caption.as_deref());
    let rendered = finish_document(config.kind.display_name(), svg, config.format);
    write_output(&config.output, &rendered)?;
    info!(bars = points.len(), "GDP chart rendered");

    Ok(GdpRun {
        document,
        points,
        scales,
        rendered,
    })
}

pub fn run_cyclist(config: &ChartConfig) -> Result<CyclistRun, AppError> {
    let client = DatasetClient::new()?;
    let records: Vec<CyclistRecord> = client.fetch_json(&config.source)?;
    run_cyclist_with_records(config, records)
}

/// Run the cyclist pipeline on pre-fetched records and write the chart.
pub fn run_cyclist_with_records(config: &ChartConfig, records: Vec<CyclistRecord>) -> Result<CyclistRun, AppError> {
    let points = transform_cyclists(&records)?;
    let scales = RaceScales::build(&points, &config.layout)?;

    let colorizer = Colorizer::new(config.hex_padding);
    let legend = Legend::from_labels(points.iter().map(|p| p.original.nationality.as_str()), &colorizer);
    let svg = render_cyclist_chart(&points, &scales, &colorizer, &legend, &config.layout);
    let rendered = finish_document(config.kind.display_name(), svg, config.format);
    write_output(&config.output, &rendered)?;
    info!(dots = points.len(), categories = legend.len(), "cyclist chart rendered");

    Ok(CyclistRun {
        points,
        scales,
        colorizer,
        legend,
        rendered,
    })
}
