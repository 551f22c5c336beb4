//! PDF export - placing the image on a grid page
//!
//! This module orchestrates the export:
//! 1. Validate the configuration and compute the grid layout
//! 2. Embed the image once
//! 3. Place it in every cell, then draw the cut lines
//! 4. Serialize and save the document

mod io;

pub use io::{document_to_bytes, save_pdf};

use crate::loader::LoadedImage;
use crate::layout::{create_grid_layout, place_image, separator_lines};
use crate::options::GridConfig;
use crate::render::{add_image_xobject, render_grid_page};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, StringFormat};
use std::path::{Path, PathBuf};

/// Download file name for a configuration, e.g. `grid_4x5_20pcs.pdf`
pub fn output_filename(config: &GridConfig) -> String {
    format!(
        "grid_{}x{}_{}pcs.pdf",
        config.columns,
        config.rows,
        config.total_cells()
    )
}

/// Build the grid document on a blocking thread
pub async fn export(image: &LoadedImage, config: &GridConfig) -> Result<Document> {
    config.validate()?;

    let image = image.clone();
    let config = config.clone();

    tokio::task::spawn_blocking(move || build_document(&image, &config)).await?
}

/// Build and save the grid document.
///
/// When `target` is an existing directory the file is named with
/// [`output_filename`] inside it. Returns the path written.
pub async fn export_to_file(
    image: &LoadedImage,
    config: &GridConfig,
    target: impl AsRef<Path>,
) -> Result<PathBuf> {
    let target = target.as_ref();
    let path = if tokio::fs::metadata(target)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        target.join(output_filename(config))
    } else {
        target.to_owned()
    };

    let doc = export(image, config).await?;
    save_pdf(doc, &path).await?;
    log::info!("Saved {} ({} cells)", path.display(), config.total_cells());
    Ok(path)
}

/// Build the grid document synchronously
pub fn build_document(image: &LoadedImage, config: &GridConfig) -> Result<Document> {
    let layout = create_grid_layout(config)?;
    let placements = place_image(&layout, image.width, image.height);
    let separators = separator_lines(&layout);

    log::info!(
        "Building {}x{} grid on {}x{} mm {} page",
        layout.columns,
        layout.rows,
        layout.page_width_mm,
        layout.page_height_mm,
        config.orientation().name()
    );

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let image_id = add_image_xobject(&mut doc, image)?;
    let page_id = render_grid_page(
        &mut doc,
        pages_id,
        &layout,
        &placements,
        &separators,
        image_id,
    )?;

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(Dictionary::from_iter(vec![
        (
            "Title",
            Object::String(
                output_filename(config).into_bytes(),
                StringFormat::Literal,
            ),
        ),
        (
            "Producer",
            Object::String(b"pdf-grid".to_vec(), StringFormat::Literal),
        ),
    ]));
    doc.trailer.set("Info", info_id);

    Ok(doc)
}
