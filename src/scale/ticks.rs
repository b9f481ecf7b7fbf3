//! Axis tick generation and tick-label formatting.
//!
//! Linear ticks follow the usual "nice numbers" rule: the raw step
//! `(stop - start) / count` is rounded to `{1, 2, 5, 10} × 10^k`.

/// A tick position in domain units plus its rendered label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick<T> {
    pub value: T,
    pub label: String,
}

impl<T> Tick<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Nice step size for roughly `count` intervals over `[start, stop]`.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || !(start.is_finite() && stop.is_finite()) || stop <= start {
        return None;
    }
    let step = (stop - start) / count as f64;
    if !step.is_normal() {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let inc = factor * 10f64.powf(power);
    inc.is_normal().then_some(inc)
}

/// Ascending nice ticks inside `[start, stop]` (either order).
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if start <= stop { (start, stop) } else { (stop, start) };
    if !(lo.is_finite() && hi.is_finite()) {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let Some(inc) = tick_increment(lo, hi, count) else {
        return Vec::new();
    };

    // Integer multiples keep 0.1 + 0.2 style drift out of the labels.
    let (i0, i1, inv) = if inc >= 1.0 {
        ((lo / inc).ceil(), (hi / inc).floor(), None)
    } else {
        let inv = (1.0 / inc).round();
        ((lo * inv).ceil(), (hi * inv).floor(), Some(inv))
    };
    // At most a few ticks per requested interval; anything else is float overflow.
    let limit = (count.max(1) * 10) as f64;
    if !(i0.is_finite() && i1.is_finite()) || i1 - i0 > limit || inv.is_some_and(|v| !v.is_finite()) {
        return Vec::new();
    }

    let (i0, i1) = (i0 as i64, i1 as i64);
    match inv {
        None => (i0..=i1).map(|i| i as f64 * inc).collect(),
        Some(inv) => (i0..=i1).map(|i| i as f64 / inv).collect(),
    }
}

/// `18000` -> `18,000`, `1234.5` -> `1,234.5`.
pub fn format_thousands(v: f64) -> String {
    let s = format!("{v}");
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Integer label without grouping (years).
pub fn format_plain(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
