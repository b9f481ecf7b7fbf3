//! Command-line parsing for the chart generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the data/scale/render code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "svgcharts", version, about = "GDP bar chart and cyclist scatter plot, rendered to SVG/HTML")]
pub struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the quarterly US GDP bar chart.
    Gdp(GdpArgs),
    /// Render the Alpe d'Huez race-time scatter plot.
    Cyclist(CyclistArgs),
    /// Render both charts into one directory (the default when no subcommand is given).
    All(AllArgs),
}

/// Options shared by the single-chart subcommands.
#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Dataset URL (overrides SVGCHARTS_*_URL and the built-in endpoint).
    #[arg(long)]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file instead of fetching it.
    #[arg(long, value_name = "JSON", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Output path (defaults to `<chart>.<format>` in the current directory).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output document format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Canvas width in pixels.
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels.
    #[arg(long)]
    pub height: Option<f64>,

    /// Padding between the canvas edge and the plot area.
    #[arg(long)]
    pub padding: Option<f64>,

    #[command(flatten)]
    pub preview: PreviewArgs,

    /// Export the normalized points to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

/// Terminal preview options.
#[derive(Debug, Args, Clone)]
pub struct PreviewArgs {
    /// Print an ASCII preview of the chart.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub plot_width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub plot_height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct GdpArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Bar width in pixels.
    #[arg(long)]
    pub bar_width: Option<f64>,
}

#[derive(Debug, Args, Clone)]
pub struct CyclistArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Dot radius in pixels.
    #[arg(long)]
    pub dot_radius: Option<f64>,

    /// Emit hex colors without zero padding (`#0` for an empty label).
    #[arg(long)]
    pub legacy_colors: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AllArgs {
    /// Directory receiving `gdp.<format>` and `cyclist.<format>`.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Output document format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Read the GDP dataset from a local JSON file.
    #[arg(long, value_name = "JSON")]
    pub gdp_input: Option<PathBuf>,

    /// Read the cyclist dataset from a local JSON file.
    #[arg(long, value_name = "JSON")]
    pub cyclist_input: Option<PathBuf>,

    #[command(flatten)]
    pub preview: PreviewArgs,

    /// Also write `gdp.csv` and `cyclist.csv` into the output directory.
    #[arg(long)]
    pub export: bool,

    /// Emit unpadded hex colors in the cyclist chart.
    #[arg(long)]
    pub legacy_colors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_cyclist_flags() {
        let cli = Cli::parse_from([
            "svgcharts",
            "cyclist",
            "--input",
            "data.json",
            "--format",
            "html",
            "--legacy-colors",
            "--dot-radius",
            "4",
            "-v",
        ]);
        assert!(cli.verbose);
        let Command::Cyclist(args) = cli.command else {
            panic!("expected cyclist subcommand");
        };
        assert_eq!(args.chart.input, Some(PathBuf::from("data.json")));
        assert_eq!(args.chart.format, OutputFormat::Html);
        assert_eq!(args.dot_radius, Some(4.0));
        assert!(args.legacy_colors);
        assert!(!args.chart.preview.plot);
    }

    #[test]
    fn url_and_input_conflict() {
        let res = Cli::try_parse_from(["svgcharts", "gdp", "--url", "http://x", "--input", "a.json"]);
        assert!(res.is_err());
    }

    #[test]
    fn all_defaults_to_current_directory() {
        let cli = Cli::parse_from(["svgcharts", "all"]);
        let Command::All(args) = cli.command else {
            panic!("expected all subcommand");
        };
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert_eq!(args.format, OutputFormat::Svg);
        assert_eq!(args.preview.plot_width, 100);
    }
}
