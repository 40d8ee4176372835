//! # Render Module
//!
//! Draws docking score charts as SVG through `plotters`.
//!
//! The SVG backend is used so that no system fonts or image encoders are required.
//! Requested output paths with another extension (typically `.png`) are rewritten to
//! `.svg`; every drawing function returns the path it actually wrote.
//!
//! - **Histogram** ([`histogram`]) - Distribution of best-pose scores with hit bins highlighted
//! - **Bar Chart** ([`bar_chart`]) - Top-ranked ligands, one bar each

pub mod bar_chart;
pub mod error;
pub mod histogram;
mod style;

use std::path::{Path, PathBuf};
use tracing::warn;

/// Returns `path` with an `.svg` extension.
pub fn svg_output_path(path: &Path) -> PathBuf {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        path.to_path_buf()
    } else {
        let svg_path = path.with_extension("svg");
        warn!(
            "Charts are written as SVG; using {:?} instead of {:?}.",
            svg_path, path
        );
        svg_path
    }
}
