use eframe::egui;
use pdf_grid::constants::{
    MAX_GRID_DIM, MAX_IMAGE_SCALE, MAX_MARGIN_MM, MAX_PAGE_DIM_MM, MIN_IMAGE_SCALE,
    MIN_PAGE_DIM_MM,
};
use pdf_grid::{GridSession, PageSize};
use std::ops::RangeInclusive;

use crate::ui_components::{SliderBuilder, enum_selector, labeled_drag};

const GRID_DIM_RANGE: RangeInclusive<u32> = 1..=MAX_GRID_DIM;
const SCALE_RANGE: RangeInclusive<u32> = MIN_IMAGE_SCALE..=MAX_IMAGE_SCALE;
const MARGIN_RANGE: RangeInclusive<f32> = 0.0..=MAX_MARGIN_MM;
const PAGE_DIM_RANGE: RangeInclusive<f32> = MIN_PAGE_DIM_MM..=MAX_PAGE_DIM_MM;

pub fn show(ui: &mut egui::Ui, session: &mut GridSession) {
    egui::CollapsingHeader::new("▦ Grid")
        .default_open(true)
        .show(ui, |ui| {
            let mut columns = session.config().columns;
            if labeled_drag(ui, "Columns:", &mut columns, GRID_DIM_RANGE, "") {
                session.config_mut().set_columns(columns);
            }

            let mut rows = session.config().rows;
            if labeled_drag(ui, "Rows:", &mut rows, GRID_DIM_RANGE, "") {
                session.config_mut().set_rows(rows);
            }

            let mut scale = session.config().image_scale;
            if SliderBuilder::new(&mut scale, SCALE_RANGE)
                .text("Image scale")
                .suffix("%")
                .show(ui)
            {
                session.config_mut().set_image_scale(scale);
            }
        });

    ui.add_space(10.0);

    egui::CollapsingHeader::new("📐 Page")
        .default_open(true)
        .show(ui, |ui| {
            show_page_size_selector(ui, session);
            ui.add_space(5.0);

            let mut width = session.config().page_width_mm;
            if labeled_drag(ui, "Width:", &mut width, PAGE_DIM_RANGE, " mm") {
                session.config_mut().set_page_width(width);
            }

            let mut height = session.config().page_height_mm;
            if labeled_drag(ui, "Height:", &mut height, PAGE_DIM_RANGE, " mm") {
                session.config_mut().set_page_height(height);
            }

            let mut margin = session.config().margin_mm;
            if labeled_drag(ui, "Margin:", &mut margin, MARGIN_RANGE, " mm") {
                session.config_mut().set_margin(margin);
            }

            ui.label(format!(
                "Orientation: {}",
                session.config().orientation().name()
            ));
        });

    if let Err(e) = session.config().validate() {
        ui.add_space(5.0);
        ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", e));
    }
}

fn show_page_size_selector(ui: &mut egui::Ui, session: &mut GridSession) {
    let options: Vec<(PageSize, String)> = PageSize::ALL
        .iter()
        .map(|&size| (size, size.label()))
        .collect();

    let mut selected = session.config().page_size;
    if enum_selector(ui, "page_size", "Page size:", &mut selected, &options) {
        session.config_mut().select_page_size(selected);
        log::info!("Page size set to {}", selected.label());
    }
}
