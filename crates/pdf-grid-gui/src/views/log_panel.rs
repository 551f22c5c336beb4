use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show(ui: &mut egui::Ui, logger: &AppLogger) {
    egui::CollapsingHeader::new(format!("📜 Log ({})", logger.len()))
        .id_salt("log_panel")
        .default_open(false)
        .show(ui, |ui| {
            if ui.small_button("Clear").clicked() {
                logger.clear();
            }

            egui::ScrollArea::vertical()
                .max_height(160.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.get_entries() {
                        ui.colored_label(level_color(ui, entry.level), entry.display_line())
                            .on_hover_text(entry.target.as_str());
                    }
                });
        });
}

/// Status line mirroring the latest log message
pub fn show_status(ui: &mut egui::Ui, logger: &AppLogger) {
    if let Some(entry) = logger.latest_entry() {
        ui.colored_label(level_color(ui, entry.level), entry.message);
    }
}

fn level_color(ui: &egui::Ui, level: Level) -> egui::Color32 {
    match level {
        Level::Error => ui.visuals().error_fg_color,
        Level::Warn => ui.visuals().warn_fg_color,
        _ => ui.visuals().text_color(),
    }
}
