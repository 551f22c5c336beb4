//! Shared constants for grid layout and export
//!
//! This module centralizes magic numbers used by the layout calculator,
//! the cut-line renderer and the configuration defaults.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Configuration Defaults
// =============================================================================

pub const DEFAULT_COLUMNS: u32 = 4;
pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_MARGIN_MM: f32 = 10.0;
pub const DEFAULT_IMAGE_SCALE: u32 = 95;

/// Largest column or row count accepted by validation
pub const MAX_GRID_DIM: u32 = 10;

/// Largest margin offered by the settings form (mm)
pub const MAX_MARGIN_MM: f32 = 50.0;

/// Page dimension range offered by the settings form (mm)
pub const MIN_PAGE_DIM_MM: f32 = 50.0;
pub const MAX_PAGE_DIM_MM: f32 = 1000.0;

/// Smallest image scale accepted by validation (percent of the cell)
pub const MIN_IMAGE_SCALE: u32 = 10;

/// Largest image scale accepted by validation (percent of the cell)
pub const MAX_IMAGE_SCALE: u32 = 100;

// =============================================================================
// Cut Lines
// =============================================================================

/// Stroke width of the dashed separators (mm)
pub const CUT_LINE_WIDTH_MM: f32 = 0.2;

/// Length of each dash and each gap (mm)
pub const CUT_LINE_DASH_MM: f32 = 2.0;

/// Gray level of the separators (150 / 255)
pub const CUT_LINE_GRAY: f32 = 150.0 / 255.0;

// =============================================================================
// Image Embedding
// =============================================================================

/// XObject resource name used for the placed image
pub const IMAGE_RESOURCE_NAME: &str = "Im0";
