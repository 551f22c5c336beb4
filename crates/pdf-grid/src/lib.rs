pub mod constants;
pub mod export;
pub mod layout;
mod loader;
mod marks;
mod options;
mod preview;
mod render;
mod session;
mod stats;
mod types;

pub use export::{
    build_document, document_to_bytes, export, export_to_file, output_filename, save_pdf,
};
pub use loader::*;
pub use options::*;
pub use preview::{PreviewLayout, generate_preview};
pub use session::{ExportRequest, GridSession, LoadTicket};
pub use stats::{GridStatistics, calculate_statistics};
pub use types::*;
