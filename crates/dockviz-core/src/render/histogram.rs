use super::error::RenderError;
use super::style::{
    FONT_FAMILY, LABEL_FONT_SIZE, STATS_BOX_COLOR, STATS_FONT_SIZE, THRESHOLD_COLOR,
    TITLE_FONT_SIZE, bar_color,
};
use super::svg_output_path;
use crate::core::analysis::histogram::Histogram;
use crate::core::analysis::threshold::Threshold;
use crate::core::models::summary::SummaryStats;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

const TITLE: &str = "Distribution of Docking Scores";

/// Draws the score distribution with hit bins highlighted, a threshold marker and the
/// statistics block. Returns the path of the written SVG.
pub fn draw(
    path: &Path,
    histogram: &Histogram,
    stats: &SummaryStats,
    threshold: Threshold,
    size: (u32, u32),
) -> Result<PathBuf, RenderError> {
    if histogram.total() == 0 {
        return Err(RenderError::EmptyData("histogram has no counts"));
    }
    let svg_path = svg_output_path(path);
    render(&svg_path, histogram, stats, threshold, size)?;
    debug!("Histogram written to {:?}", svg_path);
    Ok(svg_path)
}

fn render(
    svg_path: &Path,
    histogram: &Histogram,
    stats: &SummaryStats,
    threshold: Threshold,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let root = SVGBackend::new(svg_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let t = threshold.value();
    let x_min = histogram.lower().min(t);
    let x_max = histogram.upper().max(t);
    let pad = ((x_max - x_min) * 0.05).max(0.1);
    let y_max = (histogram.max_count() as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Binding Affinity (kcal/mol)")
        .y_desc("Number of Compounds")
        .axis_desc_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    chart.draw_series(histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            bar_color(bin.is_hit_bin(threshold)).mix(0.8).filled(),
        )
    }))?;
    chart.draw_series(
        histogram
            .bins()
            .iter()
            .filter(|bin| bin.count > 0)
            .map(|bin| {
                Rectangle::new(
                    [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                    BLACK.stroke_width(1),
                )
            }),
    )?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(t, 0.0), (t, y_max)],
            THRESHOLD_COLOR.stroke_width(2),
        )))?
        .label(format!("Threshold: {} kcal/mol", threshold))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], THRESHOLD_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT_FAMILY, STATS_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    draw_stats_box(&root, &stats.label_lines())?;

    root.present()?;
    Ok(())
}

fn draw_stats_box(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    lines: &[String],
) -> Result<(), RenderError> {
    let font_size = STATS_FONT_SIZE as i32;
    let line_height = font_size + 6;
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let (x0, y0) = (100, 70);
    let (x1, y1) = (
        x0 + longest * font_size * 6 / 10 + 20,
        y0 + line_height * lines.len() as i32 + 12,
    );

    root.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        STATS_BOX_COLOR.mix(0.8).filled(),
    ))?;
    root.draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.stroke_width(1)))?;

    let style = (FONT_FAMILY, STATS_FONT_SIZE).into_font().color(&BLACK);
    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.as_str(),
            (x0 + 10, y0 + 8 + line_height * i as i32),
            style.clone(),
        ))?;
    }
    Ok(())
}
