//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - GDP bars: `#` columns rising from the zero row
//! - cyclist ascents: `o` (slowest times on top, as in the SVG)

use chrono::Datelike;

use crate::domain::{GdpPoint, RacePoint};
use crate::scale::{LinearScale, extent};

/// Render the GDP series as a column chart.
pub fn render_gdp_ascii(points: &[GdpPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    let days = |p: &GdpPoint| f64::from(p.x.num_days_from_ce());
    let x_dom = extent(points.iter().map(days)).unwrap_or((0.0, 1.0));
    let (v_min, v_max) = extent(points.iter().map(|p| p.value)).unwrap_or((0.0, 1.0));
    let y_dom = (v_min.min(0.0), v_max.max(0.0));

    let x = LinearScale::new(x_dom, (0.0, width as f64 - 1.0));
    let y = LinearScale::new(y_dom, (height as f64 - 1.0, 0.0));
    let base = to_cell(y.map(0.0), height);

    for p in points {
        let col = to_cell(x.map(days(p)), width);
        let row = to_cell(y.map(p.value), height);
        let (top, bottom) = if row <= base { (row, base) } else { (base, row) };
        for line in grid.iter_mut().take(bottom + 1).skip(top) {
            line[col] = '#';
        }
    }

    let mut out = String::new();
    match extent(points.iter().map(|p| p.x)) {
        Some((first, last)) => out.push_str(&format!(
            "Plot: date=[{first}, {last}] | gdp=[{:.2}, {:.2}]\n",
            y_dom.0, y_dom.1
        )),
        None => out.push_str("Plot: (no data)\n"),
    }
    push_grid(&mut out, grid);
    out
}

/// Render the cyclist ascents as a scatter of `o` marks.
pub fn render_cyclist_ascii(points: &[RacePoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let mut grid = vec![vec![' '; width]; height];

    let years = extent(points.iter().map(|p| p.x));
    let times = extent(points.iter().map(|p| p.value));

    if let (Some((y0, y1)), Some((fastest, slowest))) = (years, times) {
        let x = LinearScale::new((f64::from(y0), f64::from(y1)), (0.0, width as f64 - 1.0));
        let y = LinearScale::new(
            (f64::from(slowest.seconds()), f64::from(fastest.seconds())),
            (0.0, height as f64 - 1.0),
        );
        for p in points {
            let col = to_cell(x.map(f64::from(p.x)), width);
            let row = to_cell(y.map(f64::from(p.value.seconds())), height);
            grid[row][col] = 'o';
        }
    }

    let mut out = String::new();
    match (years, times) {
        (Some((y0, y1)), Some((fastest, slowest))) => {
            out.push_str(&format!("Plot: year=[{y0}, {y1}] | time=[{fastest}, {slowest}]\n"))
        }
        _ => out.push_str("Plot: (no data)\n"),
    }
    push_grid(&mut out, grid);
    out
}

fn to_cell(v: f64, len: usize) -> usize {
    (v.round().max(0.0) as usize).min(len - 1)
}

fn push_grid(out: &mut String, grid: Vec<Vec<char>>) {
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
}
