//! Shared domain types.
//!
//! These types are small and mostly copyable. They are:
//!
//! - produced once by the transformer
//! - handed to scale builders and renderers by reference
//! - exported to CSV without extra conversion

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use clap::ValueEnum;

use crate::color::HexPadding;
use crate::data::cyclist::CyclistRecord;
use crate::data::fetch::DatasetSource;
use crate::data::gdp::GdpRecord;
use crate::error::AppError;

/// A normalized record.
///
/// `x` is the horizontal key (a date or a year), `value` the plotted quantity and
/// `original` the untouched source record, kept for tooltips and exports.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint<X, Y, R> {
    pub x: X,
    pub value: Y,
    pub original: R,
}

/// One quarter of US GDP (billions of dollars).
pub type GdpPoint = DataPoint<NaiveDate, f64, GdpRecord>;

/// One Alpe d'Huez ascent: year on x, race time on y.
pub type RacePoint = DataPoint<i32, RaceTime, CyclistRecord>;

/// A race duration, displayed as a time of day on the fixed 1970-01-01 epoch.
///
/// `"39:59"` is 39 minutes 59 seconds, i.e. `1970-01-01T00:39:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RaceTime {
    seconds: u32,
}

impl RaceTime {
    pub fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Parse an `MM:SS` string.
    ///
    /// Minutes are not capped at 59 (`"75:00"` is 01:15:00), seconds must be `< 60`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        let (min, sec) = trimmed
            .split_once(':')
            .ok_or_else(|| format!("Invalid race time '{s}'. Expected MM:SS."))?;

        let minutes = parse_clock_part(min).ok_or_else(|| format!("Invalid minutes in race time '{s}'."))?;
        let seconds = parse_clock_part(sec).ok_or_else(|| format!("Invalid seconds in race time '{s}'."))?;
        if seconds >= 60 {
            return Err(format!("Invalid race time '{s}': seconds must be below 60."));
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| format!("Race time '{s}' is out of range."))
    }

    pub fn seconds(self) -> u32 {
        self.seconds
    }

    /// Time of day on the fixed epoch.
    pub fn to_datetime(self) -> NaiveDateTime {
        DateTime::<Utc>::UNIX_EPOCH.naive_utc() + TimeDelta::seconds(i64::from(self.seconds))
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

fn parse_clock_part(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Which of the two charts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Gdp,
    Cyclist,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Gdp, ChartKind::Cyclist];

    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Gdp => "United States GDP",
            ChartKind::Cyclist => "Doping in Professional Bicycle Racing",
        }
    }

    pub fn default_url(self) -> &'static str {
        match self {
            ChartKind::Gdp => {
                "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json"
            }
            ChartKind::Cyclist => {
                "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json"
            }
        }
    }

    /// Environment variable that overrides [`ChartKind::default_url`].
    pub fn url_env_var(self) -> &'static str {
        match self {
            ChartKind::Gdp => "SVGCHARTS_GDP_URL",
            ChartKind::Cyclist => "SVGCHARTS_CYCLIST_URL",
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Gdp => "gdp",
            ChartKind::Cyclist => "cyclist",
        }
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG; hovering a mark shows its `<title>`.
    Svg,
    /// HTML page with the SVG inlined and a live `#tooltip` element.
    Html,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Html => "html",
        }
    }
}

/// Canvas geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub bar_width: f64,
    pub dot_radius: f64,
}

impl Layout {
    pub const GDP: Layout = Layout {
        width: 800.0,
        height: 420.0,
        padding: 80.0,
        bar_width: 10.0,
        dot_radius: 6.0,
    };

    pub const CYCLIST: Layout = Layout {
        width: 800.0,
        height: 500.0,
        padding: 60.0,
        bar_width: 10.0,
        dot_radius: 6.0,
    };

    pub fn for_kind(kind: ChartKind) -> Layout {
        match kind {
            ChartKind::Gdp => Self::GDP,
            ChartKind::Cyclist => Self::CYCLIST,
        }
    }

    /// Horizontal pixel range, left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding, self.width - self.padding)
    }

    /// Vertical pixel range, top to bottom.
    pub fn y_range(&self) -> (f64, f64) {
        (self.padding, self.height - self.padding)
    }

    /// Vertical pixel range, bottom to top (larger values plot higher).
    pub fn y_range_inverted(&self) -> (f64, f64) {
        (self.height - self.padding, self.padding)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let finite = [self.width, self.height, self.padding, self.bar_width, self.dot_radius]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !finite {
            return Err(AppError::new(2, "Layout values must be finite and non-negative."));
        }
        if self.width <= 2.0 * self.padding || self.height <= 2.0 * self.padding {
            return Err(AppError::new(
                2,
                format!(
                    "Canvas {}x{} is too small for padding {} (need width and height > 2 * padding).",
                    self.width, self.height, self.padding
                ),
            ));
        }
        Ok(())
    }
}

/// Everything one chart run needs, resolved from CLI args and the environment.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub source: DatasetSource,
    pub layout: Layout,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
    pub hex_padding: HexPadding,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn race_time_parses_to_epoch_time_of_day() {
        let t = RaceTime::parse("39:59").unwrap();
        assert_eq!(t.seconds(), 39 * 60 + 59);

        let dt = t.to_datetime();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(0, 39, 59).unwrap());
        assert_eq!(t.to_string(), "39:59");
    }

    #[test]
    fn race_time_minutes_roll_into_hours() {
        let t = RaceTime::parse("75:00").unwrap();
        assert_eq!(t.to_datetime().time(), NaiveTime::from_hms_opt(1, 15, 0).unwrap());
    }

    #[test]
    fn race_time_rejects_malformed_input() {
        for bad in ["", "39", "39:", ":59", "39:60", "3a:10", "-1:10", "39:59:01"] {
            assert!(RaceTime::parse(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn race_time_orders_by_duration() {
        let fast = RaceTime::parse("36:50").unwrap();
        let slow = RaceTime::parse("39:50").unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn layout_ranges_follow_padding() {
        let layout = Layout::GDP;
        assert_eq!(layout.x_range(), (80.0, 720.0));
        assert_eq!(layout.y_range(), (80.0, 340.0));
        assert_eq!(layout.y_range_inverted(), (340.0, 80.0));
    }

    #[test]
    fn layout_rejects_padding_larger_than_canvas() {
        let layout = Layout {
            padding: 500.0,
            ..Layout::GDP
        };
        let err = layout.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
