use super::threshold::Threshold;
use crate::core::models::record::DockingRecord;
use crate::core::models::summary::{Summary, SummaryStats};

/// Returns the best-pose records, preserving input order.
pub fn best_poses(records: &[DockingRecord]) -> impl Iterator<Item = &DockingRecord> {
    records.iter().filter(|r| r.is_best_pose())
}

/// Summarizes the best poses of `records` against `threshold`.
///
/// Records with a pose rank other than one are ignored. If no best pose remains the
/// result is [`Summary::NoData`].
pub fn summarize(records: &[DockingRecord], threshold: Threshold) -> Summary {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut best_score = f64::INFINITY;
    let mut hit_count = 0usize;

    for record in best_poses(records) {
        count += 1;
        sum += record.affinity;
        best_score = best_score.min(record.affinity);
        if threshold.is_hit(record.affinity) {
            hit_count += 1;
        }
    }

    if count == 0 {
        return Summary::NoData;
    }

    Summary::Computed(SummaryStats {
        count,
        best_score,
        mean_score: sum / count as f64,
        hit_count,
        hit_rate: 100.0 * hit_count as f64 / count as f64,
        threshold,
    })
}
