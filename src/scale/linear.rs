//! Continuous linear scale.

use super::ticks::{Tick, linear_ticks};

/// Maps a numeric domain `[d0, d1]` linearly onto a pixel range `[r0, r1]`.
///
/// Either interval may be reversed. Values outside the domain extrapolate (no
/// clamping). A degenerate domain (`d0 == d1`) maps every input to the range
/// midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        let span = self.domain.1 - self.domain.0;
        span == 0.0 || !span.is_finite()
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Nice ticks across the domain, labelled with `fmt`.
    pub fn ticks(&self, count: usize, fmt: fn(f64) -> String) -> Vec<Tick<f64>> {
        linear_ticks(self.domain.0, self.domain.1, count)
            .into_iter()
            .map(|v| Tick::new(v, fmt(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ticks::format_plain;

    #[test]
    fn maps_endpoints_onto_range() {
        let s = LinearScale::new((0.0, 100.0), (80.0, 720.0));
        assert_eq!(s.map(0.0), 80.0);
        assert_eq!(s.map(100.0), 720.0);
        assert_eq!(s.map(50.0), 400.0);
    }

    #[test]
    fn inverted_range_puts_max_on_top() {
        let s = LinearScale::new((0.0, 200.0), (340.0, 80.0));
        assert_eq!(s.map(0.0), 340.0);
        assert_eq!(s.map(200.0), 80.0);
        assert!(s.map(150.0) < s.map(50.0));
    }

    #[test]
    fn extrapolates_outside_domain() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(s.map(20.0), 200.0);
    }

    #[test]
    fn degenerate_domain_collapses_to_midpoint() {
        let s = LinearScale::new((7.0, 7.0), (80.0, 720.0));
        assert!(s.is_degenerate());
        assert_eq!(s.map(7.0), 400.0);
        assert_eq!(s.map(1e9), 400.0);
    }

    #[test]
    fn ticks_carry_labels() {
        let s = LinearScale::new((1994.0, 2015.0), (60.0, 740.0));
        let ticks = s.ticks(10, format_plain);
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("1994"));
        assert_eq!(ticks.last().map(|t| t.value), Some(2014.0));
    }
}
