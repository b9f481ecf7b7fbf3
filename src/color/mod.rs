//! Deterministic category colors.
//!
//! A label's UTF-16 code units are summed, the sum is read as the decimal fraction
//! `0.<sum>` and scaled onto `0..=0xFFFFFF`:
//!
//! ```text
//! "ITA" -> 73 + 84 + 65 = 222 -> floor(0.222 * 16777215) = 3724541 -> #38d4fd
//! ```
//!
//! Distinct labels may collide (`"ITA"`, `"GER"` and `"COL"` all sum to 222).

use std::fmt;

const MAX_COLOR: f64 = 16_777_215.0;

/// How the hex digits are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexPadding {
    /// Always six digits (`#0a0b0c`).
    #[default]
    ZeroPadded,
    /// Minimal digits (`{:x}`). Only the empty
    /// label (sum 0) produces a short string: `#0`.
    Unpadded,
}

/// A `#`-prefixed lower-case hex color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryColor(String);

impl CategoryColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Colorizer {
    padding: HexPadding,
}

impl Colorizer {
    pub fn new(padding: HexPadding) -> Self {
        Self { padding }
    }

    pub fn color(&self, label: &str) -> CategoryColor {
        let n = color_value(char_code_sum(label));
        match self.padding {
            HexPadding::ZeroPadded => CategoryColor(format!("#{n:06x}")),
            HexPadding::Unpadded => CategoryColor(format!("#{n:x}")),
        }
    }
}

/// Sum of the label's UTF-16 code units.
pub fn char_code_sum(label: &str) -> u64 {
    label.encode_utf16().map(u64::from).sum()
}

/// `floor(0.<sum> * 0xFFFFFF)`.
fn color_value(sum: u64) -> u32 {
    // 0.<sum> == sum / 10^digits, and both sides round to the same f64.
    let digits = sum.checked_ilog10().map_or(1, |d| d + 1);
    let fraction = sum as f64 / 10f64.powi(digits as i32);
    (fraction * MAX_COLOR).floor() as u32
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: CategoryColor,
}

/// Distinct labels in first-appearance order, each with its color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn from_labels<'a, I>(labels: I, colorizer: &Colorizer) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<LegendEntry> = Vec::new();
        for label in labels {
            if entries.iter().any(|e| e.label == label) {
                continue;
            }
            entries.push(LegendEntry {
                label: label.to_string(),
                color: colorizer.color(label),
            });
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
