use super::{CommandStatus, report_no_data};
use crate::cli::SummaryArgs;
use crate::config::builder::{CliOverrides, build_config};
use crate::error::{CliError, Result};
use dockviz::core::analysis::ranking::RankedEntry;
use dockviz::core::io::table::TableMetadata;
use dockviz::core::models::summary::SummaryStats;
use dockviz::workflows::analyze::{self, AnalysisOutcome, AnalysisReport};
use serde::Serialize;
use std::fmt::Write;
use tracing::info;

#[derive(Serialize)]
struct SummaryJson<'a> {
    stats: &'a SummaryStats,
    metadata: &'a TableMetadata,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top: Vec<RankedEntry<'a>>,
}

pub fn run(args: SummaryArgs) -> Result<CommandStatus> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(
        &args.input,
        None,
        &CliOverrides {
            table: Some(&args.table),
            threshold: args.threshold,
            top_n: args.top_n,
            ..Default::default()
        },
    )?;

    let report = match analyze::run(&app.input_path, &app.plot_config.analysis)? {
        AnalysisOutcome::NoData { metadata } => {
            return Ok(report_no_data(&app.input_path, &metadata));
        }
        AnalysisOutcome::Ready(report) => report,
    };

    // Ranking is only listed on request; the resolved value still honors the config layers.
    let listed = if args.top_n.is_some() {
        app.plot_config.chart.top_n
    } else {
        0
    };
    if args.json {
        println!("{}", render_json(&report, listed)?);
    } else {
        print!("{}", render_text(&report, listed));
    }
    Ok(CommandStatus::Completed)
}

fn render_json(report: &AnalysisReport, listed: usize) -> Result<String> {
    let json = SummaryJson {
        stats: &report.stats,
        metadata: &report.metadata,
        top: report.top(listed),
    };
    serde_json::to_string_pretty(&json)
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to serialize summary: {}", e)))
}

fn render_text(report: &AnalysisReport, listed: usize) -> String {
    let mut out = format!("Summary of {} best pose(s)\n{}\n", report.stats.count, report.stats);
    let top = report.top(listed);
    if top.is_empty() {
        return out;
    }

    let width = top
        .iter()
        .map(|entry| entry.record.ligand_id.len())
        .max()
        .unwrap_or(0)
        .max("Ligand".len());
    let _ = writeln!(out, "\n{:>4}  {:<width$}  {:>9}", "Rank", "Ligand", "Affinity");
    for entry in &top {
        let marker = if entry.classification.is_hit() { "  HIT" } else { "" };
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>9.2}{}",
            entry.rank, entry.record.ligand_id, entry.record.affinity, marker
        );
    }
    out
}
