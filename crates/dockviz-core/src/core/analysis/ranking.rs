use super::threshold::{Classification, Threshold};
use crate::core::models::record::DockingRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// A best-pose record placed in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based position in display order.
    pub rank: usize,
    pub record: &'a DockingRecord,
    pub classification: Classification,
}

/// Display order: ascending affinity (best first), then ligand id, then pose rank.
pub fn display_order(a: &DockingRecord, b: &DockingRecord) -> Ordering {
    a.affinity
        .total_cmp(&b.affinity)
        .then_with(|| a.ligand_id.cmp(&b.ligand_id))
        .then_with(|| a.mode.cmp(&b.mode))
}

/// Sorts records in place into display order.
pub fn sort_for_display(records: &mut [DockingRecord]) {
    records.sort_by(display_order);
}

/// Numbers `records`, which must already be in display order, and classifies each
/// against `threshold`.
pub fn rank_sorted(records: &[DockingRecord], threshold: Threshold) -> Vec<RankedEntry<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| RankedEntry {
            rank: i + 1,
            record,
            classification: threshold.classify(record.affinity),
        })
        .collect()
}
