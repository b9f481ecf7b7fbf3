//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - resolves each chart's configuration
//! - runs the chart pipelines
//! - prints summaries/plots and writes optional exports

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{AllArgs, ChartArgs, Command, CyclistArgs, GdpArgs, PreviewArgs};
use crate::color::HexPadding;
use crate::data::DatasetSource;
use crate::domain::{ChartConfig, ChartKind, Layout, OutputFormat};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `svgcharts` binary.
pub fn run() -> Result<(), AppError> {
    // Clap requires a subcommand name, so `svgcharts` and `svgcharts --format html`
    // are rewritten to `svgcharts all ...` before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Gdp(args) => handle_gdp(&gdp_config_from_args(&args)?),
        Command::Cyclist(args) => handle_cyclist(&cyclist_config_from_args(&args)?),
        Command::All(args) => handle_all(&args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_gdp(config: &ChartConfig) -> Result<(), AppError> {
    let run = pipeline::run_gdp(config)?;

    println!("{}", crate::report::format_gdp_summary(&run.document, &run.points, config));

    if config.plot {
        let plot = crate::plot::render_gdp_ascii(&run.points, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::export::write_gdp_csv(path, &run.points)?;
    }

    Ok(())
}

fn handle_cyclist(config: &ChartConfig) -> Result<(), AppError> {
    let run = pipeline::run_cyclist(config)?;

    println!("{}", crate::report::format_cyclist_summary(&run.points, &run.legend, config));

    if config.plot {
        let plot = crate::plot::render_cyclist_ascii(&run.points, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export {
        crate::io::export::write_cyclist_csv(path, &run.points, &run.colorizer)?;
    }

    Ok(())
}

/// Render both charts. A failure in one chart does not stop the other; the first
/// error is returned once both have been attempted.
fn handle_all(args: &AllArgs) -> Result<(), AppError> {
    let configs = all_configs_from_args(args)?;

    let mut first_err = None;
    for config in &configs {
        let result = match config.kind {
            ChartKind::Gdp => handle_gdp(config),
            ChartKind::Cyclist => handle_cyclist(config),
        };
        if let Err(err) = result {
            warn!(chart = config.kind.file_stem(), "{err}");
            first_err.get_or_insert(err);
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => {
            info!(dir = %args.out_dir.display(), "all charts written");
            Ok(())
        }
    }
}

pub fn gdp_config_from_args(args: &GdpArgs) -> Result<ChartConfig, AppError> {
    let mut config = chart_config_from_args(ChartKind::Gdp, &args.chart);
    if let Some(w) = args.bar_width {
        config.layout.bar_width = w;
    }
    config.layout.validate()?;
    Ok(config)
}

pub fn cyclist_config_from_args(args: &CyclistArgs) -> Result<ChartConfig, AppError> {
    let mut config = chart_config_from_args(ChartKind::Cyclist, &args.chart);
    if let Some(r) = args.dot_radius {
        config.layout.dot_radius = r;
    }
    config.hex_padding = hex_padding(args.legacy_colors);
    config.layout.validate()?;
    Ok(config)
}

/// One config per chart, all writing into `--out-dir`.
pub fn all_configs_from_args(args: &AllArgs) -> Result<Vec<ChartConfig>, AppError> {
    ChartKind::ALL
        .iter()
        .map(|&kind| {
            let input = match kind {
                ChartKind::Gdp => args.gdp_input.clone(),
                ChartKind::Cyclist => args.cyclist_input.clone(),
            };
            let config = ChartConfig {
                kind,
                source: DatasetSource::resolve(kind, input, None),
                layout: Layout::for_kind(kind),
                format: args.format,
                output: output_path(&args.out_dir, kind, args.format),
                plot: args.preview.plot,
                plot_width: args.preview.plot_width,
                plot_height: args.preview.plot_height,
                export: args.export.then(|| args.out_dir.join(format!("{}.csv", kind.file_stem()))),
                hex_padding: hex_padding(args.legacy_colors),
            };
            config.layout.validate()?;
            Ok(config)
        })
        .collect()
}

fn chart_config_from_args(kind: ChartKind, args: &ChartArgs) -> ChartConfig {
    let mut layout = Layout::for_kind(kind);
    if let Some(w) = args.width {
        layout.width = w;
    }
    if let Some(h) = args.height {
        layout.height = h;
    }
    if let Some(p) = args.padding {
        layout.padding = p;
    }

    let PreviewArgs {
        plot,
        plot_width,
        plot_height,
    } = args.preview;

    ChartConfig {
        kind,
        source: DatasetSource::resolve(kind, args.input.clone(), args.url.clone()),
        layout,
        format: args.format,
        output: args
            .out
            .clone()
            .unwrap_or_else(|| output_path(Path::new("."), kind, args.format)),
        plot,
        plot_width,
        plot_height,
        export: args.export.clone(),
        hex_padding: HexPadding::ZeroPadded,
    }
}

fn output_path(dir: &Path, kind: ChartKind, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", kind.file_stem(), format.extension()))
}

fn hex_padding(legacy: bool) -> HexPadding {
    if legacy { HexPadding::Unpadded } else { HexPadding::ZeroPadded }
}

/// Rewrite argv so `svgcharts` defaults to `svgcharts all`.
///
/// Rules:
/// - `svgcharts`                      -> `svgcharts all`
/// - `svgcharts --format html ...`    -> `svgcharts all --format html ...`
/// - `svgcharts --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("all".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "gdp" | "cyclist" | "all");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "all flags".
    if arg1.starts_with('-') {
        argv.insert(1, "all".to_string());
        return argv;
    }

    argv
}
