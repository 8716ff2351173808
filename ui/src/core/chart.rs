//! Chart-ready series for the equipment type distribution.

use api::TypeDistribution;

/// Fill palette as RGB; colors are assigned by position and cycle past the end.
pub const PALETTE: [(u8, u8, u8); 6] = [
    (102, 126, 234),
    (118, 75, 162),
    (40, 167, 69),
    (255, 193, 7),
    (220, 53, 69),
    (23, 162, 184),
];

const FILL_ALPHA: &str = "0.8";
const BORDER_ALPHA: &str = "1";

/// One bar per distribution entry, in the order the backend delivered them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
    pub borders: Vec<String>,
}

/// `None` means there is nothing to draw: no distribution, or one without entries.
pub fn chart_series(distribution: Option<&TypeDistribution>) -> Option<ChartSeries> {
    let distribution = distribution.filter(|d| !d.is_empty())?;

    let mut series = ChartSeries {
        labels: Vec::with_capacity(distribution.len()),
        values: Vec::with_capacity(distribution.len()),
        colors: Vec::with_capacity(distribution.len()),
        borders: Vec::with_capacity(distribution.len()),
    };

    for (index, (label, count)) in distribution.iter().enumerate() {
        series.labels.push(label.to_string());
        series.values.push(count);
        series.colors.push(fill_color(index));
        series.borders.push(border_color(index));
    }

    Some(series)
}

pub fn fill_color(index: usize) -> String {
    rgba(index, FILL_ALPHA)
}

/// Same palette entry as [`fill_color`] at full opacity.
pub fn border_color(index: usize) -> String {
    rgba(index, BORDER_ALPHA)
}

fn rgba(index: usize, alpha: &str) -> String {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// A single bar with its height relative to the tallest bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar<'a> {
    pub label: &'a str,
    pub value: u64,
    pub color: &'a str,
    pub border: &'a str,
    pub height_pct: f64,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn bars(&self) -> impl Iterator<Item = Bar<'_>> + '_ {
        let max = self.max_value();
        self.labels
            .iter()
            .zip(&self.values)
            .zip(self.colors.iter().zip(&self.borders))
            .map(move |((label, value), (color, border))| Bar {
                label,
                value: *value,
                color,
                border,
                height_pct: if max == 0 {
                    0.0
                } else {
                    *value as f64 / max as f64 * 100.0
                },
            })
    }
}
