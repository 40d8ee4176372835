use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "DockViz CLI - Summarize molecular docking scores and chart the hits.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a histogram of best-pose docking scores with the hit threshold marked.
    Histogram(HistogramArgs),
    /// Draw a bar chart of the top-ranked ligands.
    Bars(BarsArgs),
    /// Print summary statistics and, optionally, the ranked ligands.
    Summary(SummaryArgs),
}

/// Arguments for the `histogram` subcommand.
#[derive(Args, Debug)]
pub struct HistogramArgs {
    /// Path to the docking score table (e.g., summary_results.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the chart. Charts are SVG; other extensions are replaced with `.svg`.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Hit threshold in kcal/mol. Poses at or below it are hits. [default: -8.0]
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Number of histogram bins.
    #[arg(short, long, value_name = "INT")]
    pub bins: Option<usize>,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Arguments for the `bars` subcommand.
#[derive(Args, Debug)]
pub struct BarsArgs {
    /// Path to the docking score table (e.g., summary_results.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the chart. Charts are SVG; other extensions are replaced with `.svg`.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Hit threshold in kcal/mol. Poses at or below it are hits. [default: -8.0]
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Number of top-ranked ligands to draw.
    #[arg(short = 'n', long, value_name = "INT")]
    pub top_n: Option<usize>,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Path to the docking score table (e.g., summary_results.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Hit threshold in kcal/mol. Poses at or below it are hits. [default: -8.0]
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Also list this many top-ranked ligands.
    #[arg(short = 'n', long, value_name = "INT")]
    pub top_n: Option<usize>,

    /// Print the summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub table: TableArgs,
}

/// Chart canvas size overrides.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct CanvasArgs {
    /// Override the chart width in pixels.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Override the chart height in pixels.
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
}

/// Options shared by every command that reads a score table.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Header of the ligand identifier column. Detected from common names if omitted.
    #[arg(long, value_name = "NAME")]
    pub ligand_column: Option<String>,

    /// Header of the pose rank column. Detected from common names if omitted.
    #[arg(long, value_name = "NAME")]
    pub mode_column: Option<String>,

    /// Header of the binding affinity column. Detected from common names if omitted.
    #[arg(long, value_name = "NAME")]
    pub affinity_column: Option<String>,

    /// Field delimiter of the input table (e.g., ',' or '\t').
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S chart.bins=40
    #[arg(
        short = 'S',
        long = "set",
        value_name = "KEY=VALUE",
        num_args(1),
        action = clap::ArgAction::Append
    )]
    pub set_values: Vec<String>,
}
