//! PDF rendering for the grid
//!
//! This module handles all PDF-specific operations:
//! - Creating the image XObject from the loaded image
//! - Building the output page with placements and cut lines

mod page;
mod xobject;

pub use page::*;
pub use xobject::*;
