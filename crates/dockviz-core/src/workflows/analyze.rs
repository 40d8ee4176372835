use super::config::AnalysisConfig;
use super::error::WorkflowError;
use crate::core::analysis::ranking::{RankedEntry, rank_sorted, sort_for_display};
use crate::core::analysis::summarize::{best_poses, summarize};
use crate::core::analysis::threshold::Threshold;
use crate::core::io::table::{DelimitedTable, TableMetadata};
use crate::core::io::traits::ScoreTable;
use crate::core::models::record::DockingRecord;
use crate::core::models::summary::SummaryStats;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Summary statistics plus the best poses they were computed from, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub stats: SummaryStats,
    /// Best-pose records sorted by ascending affinity, ties broken by ligand id.
    pub best_poses: Vec<DockingRecord>,
    pub metadata: TableMetadata,
}

impl AnalysisReport {
    pub fn threshold(&self) -> Threshold {
        self.stats.threshold
    }

    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        rank_sorted(&self.best_poses, self.threshold())
    }

    /// The first `n` ranked entries.
    pub fn top(&self, n: usize) -> Vec<RankedEntry<'_>> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn best_scores(&self) -> Vec<f64> {
        self.best_poses.iter().map(|r| r.affinity).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The table held no best-pose records.
    NoData { metadata: TableMetadata },
    Ready(AnalysisReport),
}

/// Reads the score table at `input` and summarizes it.
#[instrument(skip_all, name = "analyze_workflow")]
pub fn run(input: &Path, config: &AnalysisConfig) -> Result<AnalysisOutcome, WorkflowError> {
    info!("Reading docking scores from {:?}", input);
    let (records, metadata) =
        DelimitedTable::read_from_path(input, &config.layout).map_err(|source| {
            WorkflowError::Table {
                path: input.to_path_buf(),
                source,
            }
        })?;
    info!(
        "Read {} pose(s) from {} row(s).",
        records.len(),
        metadata.rows_read
    );

    Ok(analyze_records(&records, metadata, config.threshold))
}

/// Summarizes records that have already been loaded.
pub fn analyze_records(
    records: &[DockingRecord],
    metadata: TableMetadata,
    threshold: Threshold,
) -> AnalysisOutcome {
    let Some(&stats) = summarize(records, threshold).stats() else {
        debug!("No best-pose records among {} record(s).", records.len());
        return AnalysisOutcome::NoData { metadata };
    };

    let mut best: Vec<DockingRecord> = best_poses(records).cloned().collect();
    sort_for_display(&mut best);

    info!(
        "Summarized {} ligand(s): {} hit(s) at threshold {} kcal/mol.",
        stats.count, stats.hit_count, threshold
    );

    AnalysisOutcome::Ready(AnalysisReport {
        stats,
        best_poses: best,
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::columns::{ResolvedColumn, ResolvedColumns, TableLayout};
    use crate::core::io::table::TableError;
    use std::fs;
    use tempfile::tempdir;

    fn config() -> AnalysisConfig {
        AnalysisConfig {
            threshold: Threshold::default(),
            layout: TableLayout::default(),
        }
    }

    fn column(index: usize, name: &str) -> ResolvedColumn {
        ResolvedColumn {
            index,
            name: name.to_string(),
        }
    }

    fn metadata(rows_read: usize) -> TableMetadata {
        TableMetadata {
            rows_read,
            rows_skipped: 0,
            columns: ResolvedColumns {
                ligand: column(0, "Ligand"),
                mode: column(1, "Mode"),
                affinity: column(2, "Affinity"),
            },
        }
    }

    fn write_table(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn ready_report_contains_sorted_best_poses() {
        let dir = tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "summary.csv",
            "Ligand,Mode,Affinity_(kcal/mol)\nL2,1,-7.5\nL1,1,-9.2\nL1,2,-9.0\nL3,1,-8.0\nL3,2,-7.7\n",
        );

        let AnalysisOutcome::Ready(report) = run(&path, &config()).unwrap() else {
            panic!("Expected a ready report");
        };

        assert_eq!(report.stats.count, 3);
        assert_eq!(report.stats.best_score, -9.2);
        assert_eq!(report.stats.hit_count, 2);
        assert_eq!(format!("{:.1}", report.stats.hit_rate), "66.7");
        let ids: Vec<_> = report.best_poses.iter().map(|r| r.ligand_id.as_str()).collect();
        assert_eq!(ids, ["L1", "L3", "L2"]);
        assert_eq!(report.threshold(), Threshold::default());
        assert_eq!(report.best_scores(), vec![-9.2, -8.0, -7.5]);
        assert_eq!(report.metadata.rows_read, 5);
    }

    #[test]
    fn top_truncates_ranked_entries() {
        let records: Vec<_> = (0..10)
            .map(|i| DockingRecord::new(format!("L{i}"), 1, -5.0 - i as f64))
            .collect();
        let AnalysisOutcome::Ready(report) =
            analyze_records(&records, metadata(10), Threshold::default())
        else {
            panic!("Expected a ready report");
        };

        let top = report.top(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].record.ligand_id, "L9");
        assert_eq!(top[2].rank, 3);
        assert_eq!(report.top(50).len(), 10);
    }

    #[test]
    fn ranking_uses_report_order_and_threshold() {
        let records = vec![
            DockingRecord::new("L2", 1, -7.5),
            DockingRecord::new("L1", 1, -9.2),
            DockingRecord::new("L1", 2, -9.9),
            DockingRecord::new("L3", 1, -7.4),
        ];
        let threshold = Threshold::new(-7.5).unwrap();
        let AnalysisOutcome::Ready(report) = analyze_records(&records, metadata(4), threshold)
        else {
            panic!("Expected a ready report");
        };

        assert_eq!(report.threshold(), threshold);
        assert_eq!(report.stats.threshold, threshold);
        let ranked = report.ranked();
        assert_eq!(ranked.len(), report.best_poses.len());
        for (entry, record) in ranked.iter().zip(&report.best_poses) {
            assert!(std::ptr::eq(entry.record, record));
        }
        let hits: Vec<_> = ranked.iter().map(|e| e.classification.is_hit()).collect();
        assert_eq!(hits, [true, true, false]);
    }

    #[test]
    fn only_lower_ranked_poses_is_no_data() {
        let dir = tempdir().unwrap();
        let path = write_table(
            dir.path(),
            "poses.csv",
            "Ligand,Mode,Affinity_(kcal/mol)\nL1,2,-9.2\nL2,2,-7.5\n",
        );

        match run(&path, &config()).unwrap() {
            AnalysisOutcome::NoData { metadata } => assert_eq!(metadata.rows_read, 2),
            other => panic!("Expected NoData, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_table_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        match run(&missing, &config()) {
            Err(WorkflowError::Table { path, source }) => {
                assert_eq!(path, missing);
                assert!(matches!(source, TableError::Io(_)));
            }
            other => panic!("Expected a table error, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_table_error() {
        let dir = tempdir().unwrap();
        let path = write_table(dir.path(), "bad.csv", "Ligand,Affinity\nL1,-9.0\n");
        let err = run(&path, &config()).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Table {
                source: TableError::MissingColumn { .. },
                ..
            }
        ));
        assert!(err.to_string().contains("bad.csv"));
    }
}
