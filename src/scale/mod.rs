//! Scale builder: domain → pixel mappings for both charts.
//!
//! Scales are derived once from the full collection's extent and never mutated.
//!
//! - GDP: calendar-time x, linear `[min(0, lo), max(0, hi)]` y with an inverted pixel range
//! - cyclist: linear year x, clock y with a *reversed* domain (slowest time on top)

pub mod linear;
pub mod ticks;
pub mod time;

use tracing::debug;

use crate::domain::{GdpPoint, Layout, RacePoint};
use crate::error::AppError;

pub use linear::LinearScale;
pub use ticks::Tick;
pub use time::{ClockScale, DateScale};

/// Min and max of a collection; `None` when it is empty.
///
/// Values that do not compare with themselves (NaN) are skipped.
pub fn extent<T, I>(values: I) -> Option<(T, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut out: Option<(T, T)> = None;
    for v in values {
        if v.partial_cmp(&v).is_none() {
            continue;
        }
        out = Some(match out {
            None => (v, v),
            Some((lo, hi)) => (if v < lo { v } else { lo }, if v > hi { v } else { hi }),
        });
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdpScales {
    pub x: DateScale,
    pub y: LinearScale,
}

impl GdpScales {
    pub fn build(points: &[GdpPoint], layout: &Layout) -> Result<Self, AppError> {
        let dates = extent(points.iter().map(|p| p.x)).ok_or_else(|| empty_dataset("GDP"))?;
        let (min, max) = extent(points.iter().map(|p| p.value)).ok_or_else(|| empty_dataset("GDP"))?;

        // Zero stays on the axis; negative values extend the domain downwards.
        let values = (min.min(0.0), max.max(0.0));
        let x = DateScale::new(dates, layout.x_range());
        let y = LinearScale::new(values, layout.y_range_inverted());
        debug!(?dates, ?values, "GDP scales built");

        Ok(Self { x, y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceScales {
    pub x: LinearScale,
    pub y: ClockScale,
}

impl RaceScales {
    pub fn build(points: &[RacePoint], layout: &Layout) -> Result<Self, AppError> {
        let (y0, y1) = extent(points.iter().map(|p| p.x)).ok_or_else(|| empty_dataset("cyclist"))?;
        let (fastest, slowest) = extent(points.iter().map(|p| p.value)).ok_or_else(|| empty_dataset("cyclist"))?;

        let x = LinearScale::new((f64::from(y0), f64::from(y1)), layout.x_range());
        // Reversed on purpose: the slowest time sits at the top edge.
        let y = ClockScale::new((slowest, fastest), layout.y_range());
        debug!(years = ?(y0, y1), fastest = %fastest, slowest = %slowest, "cyclist scales built");

        Ok(Self { x, y })
    }
}

fn empty_dataset(name: &str) -> AppError {
    AppError::new(4, format!("The {name} dataset has no records; cannot build scales."))
}
