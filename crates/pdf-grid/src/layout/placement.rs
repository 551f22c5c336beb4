//! Image placement within grid cells
//!
//! Fits the image into a cell at the configured scale while keeping its
//! native aspect ratio, then centers it.

use super::{CellPlacement, DrawSize, GridLayout, Rect};

/// Compute the draw size for an image inside a cell.
///
/// When the image is relatively wider than the cell, the width is the
/// limiting dimension; otherwise the height is. The limiting side is exactly
/// `scale_factor` of the cell, the other side follows the image aspect ratio.
pub fn fit_draw_size(
    cell_width: f32,
    cell_height: f32,
    image_width_px: u32,
    image_height_px: u32,
    scale_factor: f32,
) -> DrawSize {
    let image_aspect = image_width_px as f32 / image_height_px as f32;
    let cell_aspect = cell_width / cell_height;

    if image_aspect > cell_aspect {
        let width = cell_width * scale_factor;
        DrawSize {
            width,
            height: width / image_aspect,
        }
    } else {
        let height = cell_height * scale_factor;
        DrawSize {
            width: height * image_aspect,
            height,
        }
    }
}

/// Center a draw size inside a cell
pub fn center_in_cell(cell: &Rect, size: DrawSize) -> Rect {
    Rect::new(
        cell.x + (cell.width - size.width) / 2.0,
        cell.y + (cell.height - size.height) / 2.0,
        size.width,
        size.height,
    )
}

/// Draw size of the image for this layout
pub fn image_draw_size(layout: &GridLayout, image_width_px: u32, image_height_px: u32) -> DrawSize {
    fit_draw_size(
        layout.cell_width_mm,
        layout.cell_height_mm,
        image_width_px,
        image_height_px,
        layout.scale_factor,
    )
}

/// Place one copy of the image in every cell, in row-major order
pub fn place_image(
    layout: &GridLayout,
    image_width_px: u32,
    image_height_px: u32,
) -> Vec<CellPlacement> {
    let size = image_draw_size(layout, image_width_px, image_height_px);

    layout
        .positions()
        .map(|position| {
            let cell = layout.cell_rect(position);
            CellPlacement {
                position,
                cell,
                draw: center_in_cell(&cell, size),
            }
        })
        .collect()
}
