use dockviz::core::analysis::histogram::DEFAULT_BIN_COUNT;
use dockviz::core::analysis::threshold::DEFAULT_THRESHOLD_KCAL_MOL;
use dockviz::workflows::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_TOP_N};

pub struct DefaultsConfig {
    pub threshold: f64,
    pub bins: usize,
    pub width: u32,
    pub height: u32,
    pub top_n: usize,
    pub delimiter: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD_KCAL_MOL,
            bins: DEFAULT_BIN_COUNT,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            top_n: DEFAULT_TOP_N,
            delimiter: b',',
        }
    }
}
