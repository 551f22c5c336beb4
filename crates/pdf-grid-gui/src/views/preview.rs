use eframe::egui::{self, Color32, Pos2, Rect, Stroke, StrokeKind, Vec2};
use pdf_grid::constants::{CUT_LINE_DASH_MM, CUT_LINE_GRAY, CUT_LINE_WIDTH_MM};
use pdf_grid::{GridConfig, PreviewLayout, layout};

/// Largest texture side uploaded for the preview
const MAX_TEXTURE_SIDE: u32 = 2048;

/// Convert the loaded bitmap into a preview texture image, downscaled when
/// it is larger than the preview ever needs
pub fn texture_image(bitmap: &image::RgbaImage) -> egui::ColorImage {
    let (width, height) = bitmap.dimensions();
    let pixels = if width.max(height) > MAX_TEXTURE_SIDE {
        let scale = MAX_TEXTURE_SIDE as f32 / width.max(height) as f32;
        let new_width = ((width as f32 * scale).round() as u32).max(1);
        let new_height = ((height as f32 * scale).round() as u32).max(1);
        image::imageops::thumbnail(bitmap, new_width, new_height)
    } else {
        bitmap.clone()
    };

    egui::ColorImage::from_rgba_unmultiplied(
        [pixels.width() as usize, pixels.height() as usize],
        pixels.as_raw(),
    )
}

/// Paint the page preview into the available space
pub fn show(
    ui: &mut egui::Ui,
    config: &GridConfig,
    preview: Option<&PreviewLayout>,
    texture: Option<&egui::TextureHandle>,
) {
    let Some(preview) = preview else {
        ui.centered_and_justified(|ui| {
            ui.heading("Invalid settings");
        });
        return;
    };

    let page_rect = fit_page(ui.available_rect_before_wrap(), preview.aspect_ratio);
    ui.allocate_rect(page_rect, egui::Sense::hover());
    let painter = ui.painter_at(page_rect);

    painter.rect_filled(page_rect, 0.0, Color32::WHITE);
    painter.rect_stroke(
        page_rect,
        0.0,
        Stroke::new(1.0, Color32::from_gray(120)),
        StrokeKind::Outside,
    );

    let to_screen = |r: &layout::Rect| {
        Rect::from_min_size(
            page_rect.min + Vec2::new(r.x * page_rect.width(), r.y * page_rect.height()),
            Vec2::new(r.width * page_rect.width(), r.height * page_rect.height()),
        )
    };

    painter.rect_stroke(
        to_screen(&preview.usable),
        0.0,
        Stroke::new(0.5, Color32::from_gray(225)),
        StrokeKind::Inside,
    );

    match texture {
        Some(texture) => {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            for image_rect in &preview.images {
                painter.image(texture.id(), to_screen(image_rect), uv, Color32::WHITE);
            }
        }
        None => {
            for cell in &preview.cells {
                painter.rect_filled(to_screen(cell).shrink(2.0), 0.0, Color32::from_gray(245));
            }
        }
    }

    // Cut lines scaled from their printed size
    let px_per_mm = page_rect.width() / config.page_width_mm;
    let gray = (CUT_LINE_GRAY * 255.0).round() as u8;
    let stroke = Stroke::new(
        (CUT_LINE_WIDTH_MM * px_per_mm).max(1.0),
        Color32::from_gray(gray),
    );
    let dash = (CUT_LINE_DASH_MM * px_per_mm).max(2.0);

    let to_screen_pos = |x: f32, y: f32| {
        page_rect.min + Vec2::new(x * page_rect.width(), y * page_rect.height())
    };
    for line in &preview.cut_lines {
        let path = [to_screen_pos(line.x1, line.y1), to_screen_pos(line.x2, line.y2)];
        painter.extend(egui::Shape::dashed_line(&path, stroke, dash, dash));
    }
}

/// Largest rect with the page's aspect ratio centered in `available`
fn fit_page(available: Rect, aspect_ratio: f32) -> Rect {
    let available = available.shrink(16.0);
    let mut size = Vec2::new(available.width(), available.width() / aspect_ratio);
    if size.y > available.height() {
        size = Vec2::new(available.height() * aspect_ratio, available.height());
    }
    Rect::from_center_size(available.center(), size)
}
