use pdf_async_runtime::{ExportRequest, GridUpdate};
use pdf_grid::{export, save_pdf};
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_export(
    request: ExportRequest,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<GridUpdate>,
) {
    let cells = request.config.total_cells();

    let _ = update_tx.send(GridUpdate::Progress {
        operation: format!("Placing {} images", cells),
        current: 0,
        total: 2,
    });

    let doc = match export(&request.image, &request.config).await {
        Ok(doc) => doc,
        Err(e) => {
            let _ = update_tx.send(GridUpdate::ExportFailed {
                message: format!("Failed to build PDF: {}", e),
            });
            return;
        }
    };

    let _ = update_tx.send(GridUpdate::Progress {
        operation: "Saving PDF".to_string(),
        current: 1,
        total: 2,
    });

    if let Err(e) = save_pdf(doc, &output_path).await {
        let _ = update_tx.send(GridUpdate::ExportFailed {
            message: format!("Failed to save PDF: {}", e),
        });
        return;
    }

    log::info!("Saved {} ({} cells)", output_path.display(), cells);
    let _ = update_tx.send(GridUpdate::ExportComplete {
        path: output_path,
        cells,
    });
}
