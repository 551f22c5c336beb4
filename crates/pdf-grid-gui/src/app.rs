use eframe::egui;
use pdf_async_runtime::{GridUpdate, WorkerChannels};
use pdf_grid::{GridSession, calculate_statistics, generate_preview};

use crate::logger::AppLogger;
use crate::views::{self, ControlsContext};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct GridApp {
    session: GridSession,

    // Async infrastructure
    channels: WorkerChannels,

    // Progress tracking
    progress: Option<ProgressState>,

    // Preview texture of the loaded image
    texture: Option<egui::TextureHandle>,

    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl GridApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (channels, endpoints) = pdf_async_runtime::channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(endpoints));

        Self {
            session: GridSession::default(),
            channels,
            progress: None,
            texture: None,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        // Only the first file of a multi-file drop is used
        if let Some(file) = dropped.into_iter().next() {
            match file.path {
                Some(path) => views::request_load(
                    &mut self.session,
                    &self.channels,
                    path,
                    Some(file.mime.as_str()),
                ),
                None => {
                    log::warn!("Ignored {}: dropped data has no file path", file.name);
                }
            }
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        for update in self.channels.try_updates() {
            match update {
                GridUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.progress = Some(ProgressState {
                        operation,
                        current,
                        total,
                    });
                    ctx.request_repaint();
                }
                GridUpdate::ImageLoaded { ticket, image } => {
                    if !self.session.finish_load(ticket, image) {
                        continue;
                    }
                    if let Some(image) = self.session.image() {
                        self.texture = Some(ctx.load_texture(
                            "grid_image",
                            views::texture_image(&image.bitmap),
                            egui::TextureOptions::LINEAR,
                        ));
                    }
                }
                GridUpdate::ImageLoadFailed { ticket, message } => {
                    if self.session.fail_load(ticket) {
                        log::error!("{}", message);
                    }
                }
                GridUpdate::ExportComplete { path, cells } => {
                    self.session.finish_export();
                    log::info!("Generated {} images → {}", cells, path.display());
                    self.progress = None;
                }
                GridUpdate::ExportFailed { message } => {
                    self.session.finish_export();
                    log::error!("{}", message);
                    self.progress = None;
                }
            }
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        self.process_updates(ctx);

        let config = self.session.config().clone();
        let image_size = self.session.image().map(|img| (img.width, img.height));
        let stats = calculate_statistics(&config, self.session.image()).ok();
        let preview = generate_preview(&config, image_size).ok();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            views::show_log(ui, &self.logger);

            if let Some(ref progress) = self.progress {
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
            }

            views::show_status(ui, &self.logger);
        });

        egui::SidePanel::left("grid_controls")
            .min_width(300.0)
            .show(ctx, |ui| {
                views::show_controls(
                    ui,
                    ControlsContext {
                        session: &mut self.session,
                        channels: &self.channels,
                        texture: &mut self.texture,
                        stats: stats.as_ref(),
                    },
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
            views::show_preview(ui, &self.session, preview.as_ref(), self.texture.as_ref());

            if hovering {
                ui.painter().rect_filled(
                    ui.max_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(96),
                );
            }
        });

        // Keep polling while work is outstanding
        if self.session.is_loading() || self.session.is_exporting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
