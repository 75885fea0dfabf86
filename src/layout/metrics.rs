//! Text measurement
//!
//! There is no font rasterizer here, so widths are estimated from character
//! counts: each terminal column is a fixed fraction of the font size and
//! wide (CJK) glyphs take two columns. Font sizes are in points and
//! measurements in pixels, the units the SVG output uses.

use unicode_width::UnicodeWidthStr;

use super::config::FontConfig;

/// CSS pixels per point
pub const PX_PER_PT: f64 = 4.0 / 3.0;

/// Average advance of one column, as a fraction of the font size
const COLUMN_WIDTH: f64 = 0.6;

/// Line height as a multiple of the font size
const LINE_HEIGHT: f64 = 1.2;

/// Extra width taken by bold glyphs
const BOLD_FACTOR: f64 = 1.1;

/// Size of coreference subscripts relative to their label
pub const SUBSCRIPT_SCALE: f64 = 0.7;

/// Share of the line height above the baseline
pub const BASELINE_RATIO: f64 = 0.8;

/// Width and height of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Measure `text` set in `font`. Empty text still occupies one line.
pub fn measure(text: &str, font: &FontConfig) -> TextSize {
    measure_at(text, font, font.size)
}

/// Measure a label followed by its coreference subscript
pub fn measure_label(label: &str, index: &str, font: &FontConfig) -> TextSize {
    let main = measure(label, font);
    if index.is_empty() {
        return main;
    }
    let sub = measure_at(index, font, font.size * SUBSCRIPT_SCALE);
    TextSize {
        width: main.width + sub.width,
        height: main.height,
    }
}

fn measure_at(text: &str, font: &FontConfig, size: f64) -> TextSize {
    let columns = UnicodeWidthStr::width(text) as f64;
    let weight = if font.bold { BOLD_FACTOR } else { 1.0 };
    let px = size * PX_PER_PT;
    TextSize {
        width: columns * px * COLUMN_WIDTH * weight,
        height: px * LINE_HEIGHT,
    }
}
