use eframe::egui;
use pdf_grid::GridStatistics;

use crate::ui_components::stat_row;

pub fn show(ui: &mut egui::Ui, stats: Option<&GridStatistics>) {
    egui::CollapsingHeader::new("📊 Statistics")
        .default_open(true)
        .show(ui, |ui| {
            let Some(stats) = stats else {
                ui.label("No statistics available");
                ui.label("Fix the settings above to see the layout");
                return;
            };

            egui::Grid::new("grid_statistics")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    stat_row(ui, "Images per page:", stats.total_images.to_string());
                    stat_row(
                        ui,
                        "Grid:",
                        format!("{} × {}", stats.columns, stats.rows),
                    );
                    stat_row(ui, "Cell size:", format!("{} mm", stats.cell_size_label()));
                    if let Some(size) = stats.draw_size {
                        stat_row(
                            ui,
                            "Image size:",
                            format!("{:.1} × {:.1} mm", size.width, size.height),
                        );
                    }
                    stat_row(ui, "Page:", stats.page_label());
                    stat_row(ui, "Orientation:", stats.orientation.name());
                    stat_row(
                        ui,
                        "Cut lines:",
                        format!(
                            "{} vertical, {} horizontal",
                            stats.vertical_cut_lines, stats.horizontal_cut_lines
                        ),
                    );
                    stat_row(ui, "File name:", stats.output_filename.as_str());
                });
        });
}
