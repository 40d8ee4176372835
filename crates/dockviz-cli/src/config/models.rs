use dockviz::workflows::config::PlotConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    /// Requested chart path; `None` for commands that only print.
    pub output_path: Option<PathBuf>,
    pub plot_config: PlotConfig,
}
