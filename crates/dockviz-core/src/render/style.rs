use plotters::style::RGBColor;

pub(crate) const NON_HIT_COLOR: RGBColor = RGBColor(70, 130, 180);
pub(crate) const HIT_COLOR: RGBColor = RGBColor(46, 139, 87);
pub(crate) const THRESHOLD_COLOR: RGBColor = RGBColor(220, 20, 60);
pub(crate) const STATS_BOX_COLOR: RGBColor = RGBColor(245, 222, 179);

pub(crate) const FONT_FAMILY: &str = "sans-serif";
pub(crate) const TITLE_FONT_SIZE: u32 = 28;
pub(crate) const LABEL_FONT_SIZE: u32 = 18;
pub(crate) const STATS_FONT_SIZE: u32 = 16;

pub(crate) fn bar_color(is_hit: bool) -> RGBColor {
    if is_hit { HIT_COLOR } else { NON_HIT_COLOR }
}
