use super::threshold::Threshold;
use serde::Serialize;

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 30;

/// One equal-width histogram bin. The interval is `[lower, upper)` except for the
/// last bin of a histogram, which also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Bins whose lower edge lies at or below the threshold are drawn as hits.
    pub fn is_hit_bin(&self, threshold: Threshold) -> bool {
        self.lower <= threshold.value()
    }
}

/// Equal-width binning of a set of scores over their observed range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins `scores` into `bin_count` equal-width bins spanning `[min, max]`.
    ///
    /// When every score is identical the range is widened to `[v - 0.5, v + 0.5]`.
    /// Returns `None` for an empty score list, zero bins, or non-finite scores.
    pub fn from_scores(scores: &[f64], bin_count: usize) -> Option<Self> {
        if scores.is_empty() || bin_count == 0 || scores.iter().any(|s| !s.is_finite()) {
            return None;
        }

        let (min, max) = scores
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        let (lower, upper) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };

        let width = (upper - lower) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                lower: lower + width * i as f64,
                upper: if i + 1 == bin_count {
                    upper
                } else {
                    lower + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for &score in scores {
            let index = (((score - lower) / width).floor() as usize).min(bin_count - 1);
            bins[index].count += 1;
        }

        Some(Self { bins })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn lower(&self) -> f64 {
        self.bins.first().map_or(0.0, |b| b.lower)
    }

    pub fn upper(&self) -> f64 {
        self.bins.last().map_or(0.0, |b| b.upper)
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
