//! Synthetic growth curves for the complexity charts.
//!
//! A trendline is not a measurement: it is the shape of a complexity class
//! sampled at input sizes `n = 1..=100`, good enough to show that `O(n^2)`
//! leaves `O(n)` behind.

use serde::Serialize;

use crate::model::ComplexityLabel;

/// Number of samples in every trendline.
pub const TRENDLINE_POINTS: usize = 100;

/// Exactly [`TRENDLINE_POINTS`] values; index `i` holds the value at `n = i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trendline(Vec<u64>);

impl Trendline {
    pub fn points(&self) -> &[u64] {
        &self.0
    }

    /// Value at input size `n` (1-based).
    pub fn at(&self, n: u64) -> Option<u64> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        self.0.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// X-axis labels shared by both charts: `1..=100`.
pub fn input_sizes() -> impl Iterator<Item = u64> {
    1..=TRENDLINE_POINTS as u64
}

/// Sample the growth class named by `label`. Unrecognized labels give a flat
/// zero line.
pub fn trendline(label: &str) -> Trendline {
    let class = ComplexityLabel::parse(label);
    Trendline(input_sizes().map(|n| class.growth(n)).collect())
}

/// Space charts use the same growth model as time charts.
pub fn space_trendline(label: &str) -> Trendline {
    trendline(label)
}
