use eframe::egui;
use pdf_async_runtime::{GridCommand, WorkerChannels};
use pdf_grid::{GridError, GridSession};

pub fn show(
    ui: &mut egui::Ui,
    session: &mut GridSession,
    channels: &WorkerChannels,
) {
    let label = if session.is_exporting() {
        "⏳ Generating..."
    } else {
        "💾 Generate PDF..."
    };

    let disabled_reason = if session.image().is_none() {
        "Load an image first"
    } else {
        "Fix the settings or wait for the current export"
    };

    if ui
        .add_enabled(session.can_export(), egui::Button::new(label))
        .on_disabled_hover_text(disabled_reason)
        .clicked()
    {
        start_export(session, channels);
    }
}

fn start_export(session: &mut GridSession, channels: &WorkerChannels) {
    let request = match session.begin_export() {
        Ok(request) => request,
        Err(GridError::ExportInProgress) => return,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let Some(output_path) = rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .set_file_name(&request.file_name)
        .save_file()
    else {
        session.finish_export();
        return;
    };

    log::info!("Generating {} → {}", request.file_name, output_path.display());

    if let Err(e) = channels.send(GridCommand::Export {
        request,
        output_path,
    }) {
        session.finish_export();
        log::error!("{}", e);
    }
}
