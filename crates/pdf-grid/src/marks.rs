//! Cut-line rendering
//!
//! Generates PDF content stream operations for the dashed separators drawn
//! between grid cells.

use crate::constants::{CUT_LINE_DASH_MM, CUT_LINE_GRAY, CUT_LINE_WIDTH_MM, mm_to_pt};
use crate::layout::SeparatorLine;

/// Stroke settings for cut lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutLineStyle {
    pub width_mm: f32,
    /// Dash and gap length (equal on/off pattern)
    pub dash_mm: f32,
    /// Gray level, 0.0 = black, 1.0 = white
    pub gray: f32,
}

impl Default for CutLineStyle {
    fn default() -> Self {
        Self {
            width_mm: CUT_LINE_WIDTH_MM,
            dash_mm: CUT_LINE_DASH_MM,
            gray: CUT_LINE_GRAY,
        }
    }
}

/// Generate the content stream for all separator lines.
///
/// Line coordinates are top-left millimeters; `page_height_mm` flips them
/// into PDF user space. Returns an empty string when there is nothing to
/// draw (a 1x1 grid).
pub fn generate_cut_lines(
    lines: &[SeparatorLine],
    page_height_mm: f32,
    style: &CutLineStyle,
) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut ops = String::new();

    // Save graphics state
    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} {} {} RG\n",
        style.gray, style.gray, style.gray
    ));
    ops.push_str(&format!("{} w\n", mm_to_pt(style.width_mm)));

    let dash = mm_to_pt(style.dash_mm);
    ops.push_str(&format!("[{} {}] 0 d\n", dash, dash));

    for line in lines {
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            mm_to_pt(line.x1),
            mm_to_pt(page_height_mm - line.y1),
            mm_to_pt(line.x2),
            mm_to_pt(page_height_mm - line.y2)
        ));
    }

    // Restore graphics state
    ops.push_str("Q\n");

    ops
}
