use crate::core::analysis::threshold::Threshold;
use serde::Serialize;
use std::fmt;

/// Aggregate statistics over the best poses of a docking run.
///
/// Values are computed once from a non-empty set of best-pose records and never
/// mutated afterwards. An empty set is represented by [`Summary::NoData`] instead,
/// so `count` is always at least one and `mean_score`/`hit_rate` are always defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of best-pose records evaluated.
    pub count: usize,
    /// Lowest (most negative) affinity among the best poses, in kcal/mol.
    pub best_score: f64,
    /// Arithmetic mean of the best-pose affinities, in kcal/mol.
    pub mean_score: f64,
    /// Number of best poses whose affinity is at or below `threshold`.
    pub hit_count: usize,
    /// `100 * hit_count / count`.
    pub hit_rate: f64,
    /// The hit threshold these statistics were computed against.
    pub threshold: Threshold,
}

impl SummaryStats {
    /// Lines of the statistics block drawn next to charts.
    pub fn label_lines(&self) -> [String; 3] {
        [
            format!("Total Compounds: {}", self.count),
            format!(
                "Hits (≤ {}): {} ({:.1}%)",
                self.threshold, self.hit_count, self.hit_rate
            ),
            format!("Best Score: {:.2} kcal/mol", self.best_score),
        ]
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Total compounds: {}", self.count)?;
        writeln!(
            f,
            "  Hits (≤ {} kcal/mol): {} ({:.1}%)",
            self.threshold, self.hit_count, self.hit_rate
        )?;
        writeln!(f, "  Best score: {:.2} kcal/mol", self.best_score)?;
        write!(f, "  Mean score: {:.2} kcal/mol", self.mean_score)
    }
}

/// Result of summarizing a set of docking records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Summary {
    /// No best-pose records were present. Callers should skip chart generation.
    NoData,
    /// Statistics over at least one best-pose record.
    Computed(SummaryStats),
}

impl Summary {
    pub fn stats(&self) -> Option<&SummaryStats> {
        match self {
            Summary::NoData => None,
            Summary::Computed(stats) => Some(stats),
        }
    }
}
