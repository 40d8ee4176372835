pub mod bars;
pub mod histogram;
pub mod summary;

use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use dockviz::core::io::table::TableMetadata;
use dockviz::workflows::plot::{self, ChartKind, PlotOutcome};
use std::path::Path;
use tracing::info;

/// How a command finished when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Completed,
    /// The table had no best-pose scores; nothing was produced.
    NoData,
}

/// Emits the single user-facing warning for a run that found no scores.
fn report_no_data(input: &Path, metadata: &TableMetadata) -> CommandStatus {
    info!(
        "No best-pose scores in {:?} ({} row(s) read, {} skipped).",
        input, metadata.rows_read, metadata.rows_skipped
    );
    eprintln!("WARNING: No scores found in {}", input.display());
    CommandStatus::NoData
}

fn plot_chart(app: &AppConfig, kind: ChartKind) -> Result<CommandStatus> {
    let output = app.output_path.as_deref().ok_or_else(|| {
        CliError::Argument(format!("{} requires an output path", kind.display_name()))
    })?;

    info!("Invoking the core plot workflow...");
    match plot::run(&app.input_path, output, &app.plot_config, kind)? {
        PlotOutcome::NoData { metadata } => Ok(report_no_data(&app.input_path, &metadata)),
        PlotOutcome::Rendered { path, report } => {
            println!("{} saved: {}", kind.display_name(), path.display());
            println!("{}", report.stats);
            Ok(CommandStatus::Completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builder::{CliOverrides, build_config};
    use serial_test::serial;
    use std::fs::{self, File};
    use std::sync::Mutex;
    use tempfile::tempdir;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    #[test]
    fn missing_output_path_is_an_argument_error() {
        let app = build_config(Path::new("in.csv"), None, &CliOverrides::default()).unwrap();
        let result = plot_chart(&app, ChartKind::Histogram);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn histogram_chart_is_written() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("summary_results.csv");
        fs::write(
            &input,
            "Ligand,Mode,Affinity_(kcal/mol)\nL1,1,-9.2\nL2,1,-7.5\nL3,1,-8.0\n",
        )
        .unwrap();
        let output = dir.path().join("affinity_distribution.png");

        let app = build_config(&input, Some(output.as_path()), &CliOverrides::default()).unwrap();
        let status = plot_chart(&app, ChartKind::Histogram).unwrap();

        assert_eq!(status, CommandStatus::Completed);
        assert!(dir.path().join("affinity_distribution.svg").exists());
    }

    #[test]
    fn empty_table_reports_no_data() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        fs::write(&input, "Ligand,Mode,Affinity_(kcal/mol)\n").unwrap();
        let output = dir.path().join("hist.svg");

        let app = build_config(&input, Some(output.as_path()), &CliOverrides::default()).unwrap();
        let status = plot_chart(&app, ChartKind::BarChart).unwrap();

        assert_eq!(status, CommandStatus::NoData);
        assert!(!output.exists());
    }

    #[test]
    #[serial]
    fn no_data_run_logs_no_warnings() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        fs::write(&input, "Ligand,Mode,Affinity_(kcal/mol)\nL1,2,-9.0\n").unwrap();
        let output = dir.path().join("hist.svg");
        let log_path = dir.path().join("dockviz.log");

        let file_layer = fmt::layer()
            .with_writer(Mutex::new(File::create(&log_path).unwrap()))
            .with_ansi(false)
            .with_filter(LevelFilter::TRACE);
        let subscriber = tracing_subscriber::registry().with(file_layer);

        let app = build_config(&input, Some(output.as_path()), &CliOverrides::default()).unwrap();
        let status = tracing::subscriber::with_default(subscriber, || {
            plot_chart(&app, ChartKind::Histogram).unwrap()
        });

        assert_eq!(status, CommandStatus::NoData);
        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("No best-pose scores"));
        assert!(!content.contains(" WARN "), "unexpected warning in log:\n{content}");
    }
}
