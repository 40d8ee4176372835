use crate::core::analysis::histogram::DEFAULT_BIN_COUNT;
use crate::core::analysis::threshold::Threshold;
use crate::core::io::columns::TableLayout;
use thiserror::Error;

pub const DEFAULT_CHART_WIDTH: u32 = 1500;
pub const DEFAULT_CHART_HEIGHT: u32 = 900;
pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub threshold: Threshold,
    pub layout: TableLayout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub bins: usize,
    pub width: u32,
    pub height: u32,
    /// Maximum number of ligands shown in a ranked bar chart.
    pub top_n: usize,
}

impl ChartConfig {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BIN_COUNT,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub analysis: AnalysisConfig,
    pub chart: ChartConfig,
}

#[derive(Default)]
pub struct PlotConfigBuilder {
    threshold: Option<f64>,
    layout: Option<TableLayout>,
    bins: Option<usize>,
    width: Option<u32>,
    height: Option<u32>,
    top_n: Option<usize>,
}

impl PlotConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
    pub fn layout(mut self, layout: TableLayout) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let raw_threshold = self
            .threshold
            .ok_or(ConfigError::MissingParameter("threshold"))?;
        let threshold =
            Threshold::new(raw_threshold).map_err(|e| ConfigError::InvalidParameter {
                parameter: "threshold",
                reason: e.to_string(),
            })?;

        let layout = self.layout.unwrap_or_default();
        if matches!(layout.delimiter, b'"' | b'\n' | b'\r') {
            return Err(ConfigError::InvalidParameter {
                parameter: "delimiter",
                reason: format!("{:?} cannot separate fields", layout.delimiter as char),
            });
        }

        let defaults = ChartConfig::default();
        let chart = ChartConfig {
            bins: positive("bins", self.bins.unwrap_or(defaults.bins))?,
            width: positive("width", self.width.unwrap_or(defaults.width))?,
            height: positive("height", self.height.unwrap_or(defaults.height))?,
            top_n: positive("top_n", self.top_n.unwrap_or(defaults.top_n))?,
        };

        Ok(PlotConfig {
            analysis: AnalysisConfig { threshold, layout },
            chart,
        })
    }
}

fn positive<T: PartialEq + Default>(parameter: &'static str, value: T) -> Result<T, ConfigError> {
    if value == T::default() {
        Err(ConfigError::InvalidParameter {
            parameter,
            reason: "must be greater than zero".to_string(),
        })
    } else {
        Ok(value)
    }
}
