use super::analyze::{self, AnalysisOutcome, AnalysisReport};
use super::config::{ChartConfig, PlotConfig};
use super::error::WorkflowError;
use crate::core::analysis::histogram::Histogram;
use crate::core::io::table::TableMetadata;
use crate::render::error::RenderError;
use crate::render::{bar_chart, histogram};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Distribution of best-pose scores.
    Histogram,
    /// Top-ranked ligands, one bar each.
    BarChart,
}

impl ChartKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::BarChart => "Bar chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    /// Nothing was drawn because the table held no best-pose records.
    NoData { metadata: TableMetadata },
    Rendered {
        /// Path actually written, which may differ from the requested one in extension.
        path: PathBuf,
        report: AnalysisReport,
    },
}

#[instrument(skip_all, name = "plot_workflow", fields(kind = ?kind))]
pub fn run(
    input: &Path,
    output: &Path,
    config: &PlotConfig,
    kind: ChartKind,
) -> Result<PlotOutcome, WorkflowError> {
    let report = match analyze::run(input, &config.analysis)? {
        AnalysisOutcome::NoData { metadata } => {
            debug!("No best-pose scores found in {:?}; skipping chart.", input);
            return Ok(PlotOutcome::NoData { metadata });
        }
        AnalysisOutcome::Ready(report) => report,
    };

    info!("Rendering {} to {:?}", kind.display_name().to_lowercase(), output);
    let path = render(&report, output, &config.chart, kind).map_err(|source| {
        WorkflowError::Render {
            path: output.to_path_buf(),
            source,
        }
    })?;
    info!("{} saved: {:?}", kind.display_name(), path);

    Ok(PlotOutcome::Rendered { path, report })
}

fn render(
    report: &AnalysisReport,
    output: &Path,
    chart: &ChartConfig,
    kind: ChartKind,
) -> Result<PathBuf, RenderError> {
    match kind {
        ChartKind::Histogram => {
            let histogram = Histogram::from_scores(&report.best_scores(), chart.bins)
                .ok_or(RenderError::EmptyData("no scores to bin"))?;
            histogram::draw(
                output,
                &histogram,
                &report.stats,
                report.threshold(),
                chart.size(),
            )
        }
        ChartKind::BarChart => {
            let top = report.top(chart.top_n);
            bar_chart::draw(output, &top, report.threshold(), chart.size())
        }
    }
}
