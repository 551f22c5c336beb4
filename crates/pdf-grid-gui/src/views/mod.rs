mod actions_section;
mod log_panel;
mod preview;
mod settings_section;
mod statistics_section;
mod upload_section;

pub use preview::texture_image;
pub use upload_section::request_load;

use eframe::egui;
use pdf_async_runtime::WorkerChannels;
use pdf_grid::{GridSession, GridStatistics, PreviewLayout};

use crate::logger::AppLogger;

/// Everything the side panel needs for one frame
pub struct ControlsContext<'a> {
    pub session: &'a mut GridSession,
    pub channels: &'a WorkerChannels,
    pub texture: &'a mut Option<egui::TextureHandle>,
    pub stats: Option<&'a GridStatistics>,
}

pub fn show_controls(ui: &mut egui::Ui, cx: ControlsContext<'_>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Grid PDF");
        ui.separator();

        upload_section::show(ui, cx.session, cx.channels, cx.texture);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        settings_section::show(ui, cx.session);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        statistics_section::show(ui, cx.stats);
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        actions_section::show(ui, cx.session, cx.channels);
    });
}

pub fn show_preview(
    ui: &mut egui::Ui,
    session: &GridSession,
    preview: Option<&PreviewLayout>,
    texture: Option<&egui::TextureHandle>,
) {
    preview::show(ui, session.config(), preview, texture);
}

pub fn show_log(ui: &mut egui::Ui, logger: &AppLogger) {
    log_panel::show(ui, logger);
}

pub fn show_status(ui: &mut egui::Ui, logger: &AppLogger) {
    log_panel::show_status(ui, logger);
}
