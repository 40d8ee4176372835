use super::error::RenderError;
use super::style::{FONT_FAMILY, LABEL_FONT_SIZE, THRESHOLD_COLOR, TITLE_FONT_SIZE, bar_color};
use super::svg_output_path;
use crate::core::analysis::ranking::RankedEntry;
use crate::core::analysis::threshold::Threshold;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

const TITLE: &str = "Top Docking Hits";

/// Draws one horizontal bar per ranked entry, best entry on top. Callers choose how
/// many entries to pass. Returns the path of the written SVG.
pub fn draw(
    path: &Path,
    entries: &[RankedEntry<'_>],
    threshold: Threshold,
    size: (u32, u32),
) -> Result<PathBuf, RenderError> {
    if entries.is_empty() {
        return Err(RenderError::EmptyData("no ranked entries"));
    }
    let svg_path = svg_output_path(path);
    render(&svg_path, entries, threshold, size)?;
    debug!("Bar chart with {} bar(s) written to {:?}", entries.len(), svg_path);
    Ok(svg_path)
}

fn render(
    svg_path: &Path,
    entries: &[RankedEntry<'_>],
    threshold: Threshold,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let root = SVGBackend::new(svg_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let n = entries.len();
    let t = threshold.value();
    let (lo, hi) = entries.iter().fold((t.min(0.0), t.max(0.0)), |(lo, hi), e| {
        (lo.min(e.record.affinity), hi.max(e.record.affinity))
    });
    let pad = ((hi - lo) * 0.05).max(0.1);

    // Row 0 is the bottom of the chart, so the best entry goes to row n - 1.
    let row_of = |display_index: usize| n - 1 - display_index;
    let labels: Vec<&str> = entries
        .iter()
        .rev()
        .map(|e| e.record.ligand_id.as_str())
        .collect();
    let label_area = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32
        * LABEL_FONT_SIZE
        * 6
        / 10
        + 20;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(label_area)
        .build_cartesian_2d((lo - pad)..(hi + pad), (0..n).into_segmented())?;

    let format_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(row) => labels.get(*row).map_or(String::new(), |l| l.to_string()),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n + 1)
        .y_label_formatter(&format_label)
        .x_desc("Binding Affinity (kcal/mol)")
        .axis_desc_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, entry)| {
        let row = row_of(i);
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (entry.record.affinity, SegmentValue::Exact(row + 1)),
            ],
            bar_color(entry.classification.is_hit()).mix(0.85).filled(),
        );
        bar.set_margin(3, 3, 0, 0);
        bar
    }))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(t, SegmentValue::Exact(0)), (t, SegmentValue::Exact(n))],
            THRESHOLD_COLOR.stroke_width(2),
        )))?
        .label(format!("Threshold: {} kcal/mol", threshold))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], THRESHOLD_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::ranking::{rank_sorted, sort_for_display};
    use crate::core::models::record::DockingRecord;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_one_label_per_ligand() {
        let dir = tempdir().unwrap();
        let mut records = vec![
            DockingRecord::new("ZINC001", 1, -9.2),
            DockingRecord::new("ZINC002", 1, -7.5),
            DockingRecord::new("ZINC003", 1, -8.0),
        ];
        sort_for_display(&mut records);
        let ranked = rank_sorted(&records, Threshold::default());

        let written = draw(
            &dir.path().join("top_hits.svg"),
            &ranked,
            Threshold::default(),
            (800, 600),
        )
        .unwrap();

        let svg = fs::read_to_string(written).unwrap();
        assert!(svg.contains(TITLE));
        for id in ["ZINC001", "ZINC002", "ZINC003"] {
            assert!(svg.contains(id), "missing label {id}");
        }
    }

    #[test]
    fn empty_entries_are_rejected() {
        let dir = tempdir().unwrap();
        let result = draw(
            &dir.path().join("empty.svg"),
            &[],
            Threshold::default(),
            (800, 600),
        );
        assert!(matches!(result, Err(RenderError::EmptyData(_))));
        assert!(!dir.path().join("empty.svg").exists());
    }
}
