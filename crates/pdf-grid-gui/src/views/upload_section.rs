use eframe::egui;
use pdf_async_runtime::{GridCommand, WorkerChannels};
use pdf_grid::{GridSession, is_image_media_type, media_type_for_path};
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "tga", "qoi",
];

/// Longest side of the thumbnail next to the file name
const THUMBNAIL_MAX_SIDE: f32 = 96.0;

pub fn show(
    ui: &mut egui::Ui,
    session: &mut GridSession,
    channels: &WorkerChannels,
    texture: &mut Option<egui::TextureHandle>,
) {
    egui::CollapsingHeader::new("🖼 Image")
        .default_open(true)
        .show(ui, |ui| {
            if ui.button("📂 Choose Image...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    request_load(session, channels, path, None);
                }
            }
            ui.label("or drop an image file onto the window");

            ui.add_space(5.0);

            if session.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Decoding image...");
                });
            }

            let mut remove = false;
            if let Some(image) = session.image() {
                ui.horizontal(|ui| {
                    if let Some(tex) = texture.as_ref() {
                        let size = thumbnail_size(image.width, image.height, THUMBNAIL_MAX_SIDE);
                        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                            tex.id(),
                            size,
                        )));
                    }
                    ui.vertical(|ui| {
                        ui.label(&image.name);
                        ui.label(format!("{}×{} px", image.width, image.height));
                        remove = ui.small_button("✖ Remove").clicked();
                    });
                });
            } else if !session.is_loading() {
                ui.label("No image loaded");
            }

            if remove {
                session.remove_image();
                *texture = None;
                log::info!("Image removed");
            }
        });
}

/// Size that fits a `width`×`height` image inside a `max_side` square
fn thumbnail_size(width: u32, height: u32, max_side: f32) -> egui::Vec2 {
    let longest = width.max(height).max(1) as f32;
    let scale = (max_side / longest).min(1.0);
    egui::vec2(
        (width as f32 * scale).max(1.0),
        (height as f32 * scale).max(1.0),
    )
}

/// Start loading `path` if it is an image.
///
/// The declared media type (from a drop) wins over the file extension. Files
/// that are not images are logged as warnings and ignored.
pub fn request_load(
    session: &mut GridSession,
    channels: &WorkerChannels,
    path: PathBuf,
    declared_media_type: Option<&str>,
) {
    let media_type = declared_media_type
        .filter(|mime| !mime.trim().is_empty())
        .map(str::to_string)
        .or_else(|| media_type_for_path(&path).map(str::to_string));

    let media_type = match media_type {
        Some(media_type) if is_image_media_type(&media_type) => media_type,
        _ => {
            log::warn!("Ignored {}: not an image file", path.display());
            return;
        }
    };

    let ticket = session.begin_load();
    log::info!("Loading {}...", path.display());

    if let Err(e) = channels.send(GridCommand::LoadImage {
        ticket,
        path,
        media_type: Some(media_type),
    }) {
        session.fail_load(ticket);
        log::error!("{}", e);
    }
}
