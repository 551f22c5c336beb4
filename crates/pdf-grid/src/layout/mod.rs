//! Layout calculation for the image grid
//!
//! This module handles all the geometric calculations:
//! - Grid layout (usable area, cell dimensions, separator positions)
//! - Image placement (aspect-preserving fit, centering within each cell)
//!
//! Coordinates are millimeters measured from the top-left page corner. The
//! preview and the exporter both consume these values unchanged.

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
