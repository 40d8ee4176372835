use super::{CommandStatus, plot_chart};
use crate::cli::HistogramArgs;
use crate::config::builder::{CliOverrides, build_config};
use crate::error::Result;
use dockviz::workflows::plot::ChartKind;
use tracing::info;

pub fn run(args: HistogramArgs) -> Result<CommandStatus> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(
        &args.input,
        Some(args.output.as_path()),
        &CliOverrides {
            table: Some(&args.table),
            threshold: args.threshold,
            bins: args.bins,
            top_n: None,
            canvas: args.canvas,
        },
    )?;

    plot_chart(&app, ChartKind::Histogram)
}
