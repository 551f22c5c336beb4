//! Grid layout calculation
//!
//! Divides the usable page area into equal cells and locates the internal
//! boundaries where cut lines are drawn.

use crate::options::GridConfig;
use crate::types::Result;

use super::{GridLayout, LineAxis, SeparatorLine};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the grid layout for a configuration.
///
/// The configuration is validated first, so the returned layout always has
/// at least one row and column and strictly positive cell dimensions.
pub fn create_grid_layout(config: &GridConfig) -> Result<GridLayout> {
    config.validate()?;

    let usable_width_mm = config.usable_width_mm();
    let usable_height_mm = config.usable_height_mm();

    Ok(GridLayout {
        columns: config.columns as usize,
        rows: config.rows as usize,
        page_width_mm: config.page_width_mm,
        page_height_mm: config.page_height_mm,
        margin_mm: config.margin_mm,
        usable_width_mm,
        usable_height_mm,
        cell_width_mm: usable_width_mm / config.columns as f32,
        cell_height_mm: usable_height_mm / config.rows as f32,
        scale_factor: config.scale_factor(),
    })
}

// =============================================================================
// Separators
// =============================================================================

/// Internal cut lines: `columns - 1` vertical lines spanning the usable
/// height, then `rows - 1` horizontal lines spanning the usable width.
/// Nothing is drawn along the page edges or margins.
pub fn separator_lines(layout: &GridLayout) -> Vec<SeparatorLine> {
    let top = layout.margin_mm;
    let left = layout.margin_mm;
    let bottom = top + layout.usable_height_mm;
    let right = left + layout.usable_width_mm;

    let vertical = (1..layout.columns).map(|col| {
        let x = left + col as f32 * layout.cell_width_mm;
        SeparatorLine {
            axis: LineAxis::Vertical,
            index: col,
            x1: x,
            y1: top,
            x2: x,
            y2: bottom,
        }
    });

    let horizontal = (1..layout.rows).map(|row| {
        let y = top + row as f32 * layout.cell_height_mm;
        SeparatorLine {
            axis: LineAxis::Horizontal,
            index: row,
            x1: left,
            y1: y,
            x2: right,
            y2: y,
        }
    });

    vertical.chain(horizontal).collect()
}
