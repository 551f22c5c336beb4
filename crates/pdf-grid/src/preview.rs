//! Preview geometry
//!
//! Expresses the export layout as fractions of the page so a renderer of any
//! pixel size reproduces the PDF proportions exactly.

use crate::layout::{
    GridLayout, Rect, SeparatorLine, create_grid_layout, place_image, separator_lines,
};
use crate::options::GridConfig;
use crate::types::*;

/// Page-relative layout; every coordinate is in 0.0..=1.0 of the page width
/// (x) or height (y)
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLayout {
    /// Page width divided by page height
    pub aspect_ratio: f32,
    /// Area inside the margins
    pub usable: Rect,
    /// Every grid cell, row-major
    pub cells: Vec<Rect>,
    /// Image rectangles, row-major; empty when no image is loaded
    pub images: Vec<Rect>,
    pub cut_lines: Vec<SeparatorLine>,
}

/// Generate the preview for a configuration and optional image pixel size
pub fn generate_preview(
    config: &GridConfig,
    image_size_px: Option<(u32, u32)>,
) -> Result<PreviewLayout> {
    let layout = create_grid_layout(config)?;
    Ok(preview_from_layout(&layout, image_size_px))
}

fn preview_from_layout(layout: &GridLayout, image_size_px: Option<(u32, u32)>) -> PreviewLayout {
    let (w, h) = (layout.page_width_mm, layout.page_height_mm);
    let normalize = |r: Rect| Rect::new(r.x / w, r.y / h, r.width / w, r.height / h);

    let cells = layout
        .positions()
        .map(|pos| normalize(layout.cell_rect(pos)))
        .collect();

    let images = match image_size_px {
        Some((px_w, px_h)) => place_image(layout, px_w, px_h)
            .into_iter()
            .map(|p| normalize(p.draw))
            .collect(),
        None => Vec::new(),
    };

    let cut_lines = separator_lines(layout)
        .into_iter()
        .map(|line| SeparatorLine {
            x1: line.x1 / w,
            y1: line.y1 / h,
            x2: line.x2 / w,
            y2: line.y2 / h,
            ..line
        })
        .collect();

    PreviewLayout {
        aspect_ratio: w / h,
        usable: normalize(layout.usable_rect()),
        cells,
        images,
        cut_lines,
    }
}
