//! Calendar-date and race-clock scales.
//!
//! Both interpolate linearly over an integer representation of the value: days
//! since the Unix epoch for dates, elapsed seconds for race times.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::linear::LinearScale;
use super::ticks::{Tick, tick_increment};
use crate::domain::RaceTime;

/// Candidate clock tick steps, in seconds.
const CLOCK_STEPS: [u32; 9] = [1, 5, 15, 30, 60, 300, 900, 1800, 3600];

/// Month tick steps used for spans shorter than two years.
const MONTH_STEPS: [i32; 4] = [1, 2, 3, 6];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateScale {
    domain: (NaiveDate, NaiveDate),
    linear: LinearScale,
}

impl DateScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        let linear = LinearScale::new((days_since_epoch(domain.0), days_since_epoch(domain.1)), range);
        Self { domain, linear }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        self.linear.map(days_since_epoch(date))
    }

    /// Year ticks (`%Y`) for multi-year spans, month ticks otherwise.
    pub fn ticks(&self, count: usize) -> Vec<Tick<NaiveDate>> {
        let (lo, hi) = ordered(self.domain);
        if lo == hi {
            return vec![Tick::new(lo, lo.format("%Y-%m-%d").to_string())];
        }

        let in_domain = |d: &NaiveDate| *d >= lo && *d <= hi;

        if (hi - lo).num_days() >= 2 * 365 {
            let step = tick_increment(fractional_year(lo), fractional_year(hi), count.max(1))
                .map(|s| s.round().max(1.0) as i32)
                .unwrap_or(1);
            return (lo.year()..=hi.year())
                .filter(|y| y.rem_euclid(step) == 0)
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .filter(in_domain)
                .map(|d| Tick::new(d, d.format("%Y").to_string()))
                .collect();
        }

        let m_lo = month_index(lo);
        let m_hi = month_index(hi);
        let target = (m_hi - m_lo) as f64 / count.max(1) as f64;
        let step = MONTH_STEPS
            .iter()
            .copied()
            .find(|s| f64::from(*s) >= target)
            .unwrap_or(12);

        (m_lo..=m_hi)
            .filter(|m| m.rem_euclid(step) == 0)
            .filter_map(|m| NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1))
            .filter(in_domain)
            .map(|d| {
                let label = if d.month() == 1 {
                    d.format("%Y").to_string()
                } else {
                    d.format("%b").to_string()
                };
                Tick::new(d, label)
            })
            .collect()
    }
}

/// Scale over race durations. The domain may be given high-to-low.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockScale {
    domain: (RaceTime, RaceTime),
    linear: LinearScale,
}

impl ClockScale {
    pub fn new(domain: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        let linear = LinearScale::new(
            (f64::from(domain.0.seconds()), f64::from(domain.1.seconds())),
            range,
        );
        Self { domain, linear }
    }

    pub fn domain(&self) -> (RaceTime, RaceTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map(&self, t: RaceTime) -> f64 {
        self.linear.map(f64::from(t.seconds()))
    }

    /// Ticks on the clock step closest to `span / count`, labelled `MM:SS`.
    pub fn ticks(&self, count: usize) -> Vec<Tick<RaceTime>> {
        let (lo, hi) = ordered(self.domain);
        let (lo, hi) = (lo.seconds(), hi.seconds());
        if lo == hi {
            let t = RaceTime::from_seconds(lo);
            return vec![Tick::new(t, t.to_string())];
        }

        let target = f64::from(hi - lo) / count.max(1) as f64;
        let distance = |step: u32| (f64::from(step) / target).ln().abs();
        let step = CLOCK_STEPS
            .iter()
            .copied()
            .min_by(|a, b| distance(*a).total_cmp(&distance(*b)))
            .unwrap_or(60);

        let first = lo.div_ceil(step) * step;
        (first..=hi)
            .step_by(step as usize)
            .map(RaceTime::from_seconds)
            .map(|t| Tick::new(t, t.to_string()))
            .collect()
    }
}

fn ordered<T: PartialOrd + Copy>((a, b): (T, T)) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

fn days_since_epoch(date: NaiveDate) -> f64 {
    date.signed_duration_since(DateTime::<Utc>::UNIX_EPOCH.date_naive()).num_days() as f64
}

fn fractional_year(date: NaiveDate) -> f64 {
    f64::from(date.year()) + f64::from(date.ordinal0()) / 365.25
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_scale_maps_extent_onto_range() {
        let s = DateScale::new((ymd(1947, 1, 1), ymd(2015, 7, 1)), (80.0, 720.0));
        assert_eq!(s.map(ymd(1947, 1, 1)), 80.0);
        assert!((s.map(ymd(2015, 7, 1)) - 720.0).abs() < 1e-9);
        let mid = s.map(ymd(1981, 1, 1));
        assert!(mid > 80.0 && mid < 720.0);
    }

    #[test]
    fn date_scale_interpolates_by_calendar_days() {
        // 1948 is a leap year: July 2 is day 183 of 366.
        let s = DateScale::new((ymd(1948, 1, 1), ymd(1949, 1, 1)), (0.0, 366.0));
        assert_eq!(s.map(ymd(1948, 7, 2)), 183.0);
    }

    #[test]
    fn gdp_span_ticks_every_five_years() {
        let s = DateScale::new((ymd(1947, 1, 1), ymd(2015, 7, 1)), (80.0, 720.0));
        let ticks = s.ticks(10);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"1950"));
        assert_eq!(labels.last(), Some(&"2015"));
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn short_span_ticks_by_month() {
        let s = DateScale::new((ymd(2020, 1, 1), ymd(2020, 12, 31)), (0.0, 100.0));
        let ticks = s.ticks(4);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["2020", "Apr", "Jul", "Oct"]);
    }

    #[test]
    fn single_date_domain_is_finite() {
        let d = ymd(2000, 1, 1);
        let s = DateScale::new((d, d), (80.0, 720.0));
        assert_eq!(s.map(d), 400.0);
        assert_eq!(s.ticks(10).len(), 1);
    }

    #[test]
    fn reversed_clock_domain_puts_slowest_on_top() {
        let fast = RaceTime::parse("36:50").unwrap();
        let slow = RaceTime::parse("39:50").unwrap();
        let s = ClockScale::new((slow, fast), (60.0, 440.0));
        assert_eq!(s.map(slow), 60.0);
        assert_eq!(s.map(fast), 440.0);
    }

    #[test]
    fn clock_ticks_use_nearest_step() {
        let fast = RaceTime::parse("36:50").unwrap();
        let slow = RaceTime::parse("39:50").unwrap();
        let s = ClockScale::new((slow, fast), (60.0, 440.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("37:00"));
        assert_eq!(ticks.get(1).map(|t| t.label.as_str()), Some("37:15"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("39:45"));
    }
}
