use pdf_async_runtime::{GridUpdate, LoadTicket};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_load(
    ticket: LoadTicket,
    path: PathBuf,
    media_type: Option<String>,
    update_tx: &mpsc::UnboundedSender<GridUpdate>,
) {
    let result = match media_type {
        Some(media_type) => pdf_grid::load_image_as(&path, &media_type).await,
        None => pdf_grid::load_image(&path).await,
    };

    let update = match result {
        Ok(image) => GridUpdate::ImageLoaded { ticket, image },
        Err(e) => GridUpdate::ImageLoadFailed {
            ticket,
            message: format!("Failed to load {}: {}", path.display(), e),
        },
    };
    let _ = update_tx.send(update);
}
