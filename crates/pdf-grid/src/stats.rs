use crate::export::output_filename;
use crate::layout::{DrawSize, LineAxis, create_grid_layout, image_draw_size, separator_lines};
use crate::loader::LoadedImage;
use crate::options::GridConfig;
use crate::types::*;

/// Summary of a grid configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics {
    /// Copies of the image on the page
    pub total_images: usize,
    pub columns: usize,
    pub rows: usize,
    pub cell_width_mm: f32,
    pub cell_height_mm: f32,
    pub page_size: PageSize,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub orientation: Orientation,
    pub vertical_cut_lines: usize,
    pub horizontal_cut_lines: usize,
    /// Image size per cell, when an image is loaded
    pub draw_size: Option<DrawSize>,
    pub output_filename: String,
}

impl GridStatistics {
    /// Cell size rounded to one decimal, e.g. "47.5 × 55.4"
    pub fn cell_size_label(&self) -> String {
        format!("{:.1} × {:.1}", self.cell_width_mm, self.cell_height_mm)
    }

    /// Page description, e.g. "A4 (210 × 297 mm)"
    pub fn page_label(&self) -> String {
        format!(
            "{} ({} × {} mm)",
            self.page_size.name(),
            self.page_width_mm,
            self.page_height_mm
        )
    }
}

/// Calculate statistics for a configuration
pub fn calculate_statistics(
    config: &GridConfig,
    image: Option<&LoadedImage>,
) -> Result<GridStatistics> {
    let layout = create_grid_layout(config)?;
    let lines = separator_lines(&layout);

    let vertical_cut_lines = lines
        .iter()
        .filter(|line| line.axis == LineAxis::Vertical)
        .count();

    Ok(GridStatistics {
        total_images: layout.cell_count(),
        columns: layout.columns,
        rows: layout.rows,
        cell_width_mm: layout.cell_width_mm,
        cell_height_mm: layout.cell_height_mm,
        page_size: config.page_size,
        page_width_mm: config.page_width_mm,
        page_height_mm: config.page_height_mm,
        orientation: config.orientation(),
        vertical_cut_lines,
        horizontal_cut_lines: lines.len() - vertical_cut_lines,
        draw_size: image.map(|img| image_draw_size(&layout, img.width, img.height)),
        output_filename: output_filename(config),
    })
}
