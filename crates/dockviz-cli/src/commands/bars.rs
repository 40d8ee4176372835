use super::{CommandStatus, plot_chart};
use crate::cli::BarsArgs;
use crate::config::builder::{CliOverrides, build_config};
use crate::error::Result;
use dockviz::workflows::plot::ChartKind;
use tracing::info;

pub fn run(args: BarsArgs) -> Result<CommandStatus> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(
        &args.input,
        Some(args.output.as_path()),
        &CliOverrides {
            table: Some(&args.table),
            threshold: args.threshold,
            bins: None,
            top_n: args.top_n,
            canvas: args.canvas,
        },
    )?;

    plot_chart(&app, ChartKind::BarChart)
}
