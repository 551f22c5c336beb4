#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

use logger::AppLogger;

const MAX_LOG_ENTRIES: usize = 500;

fn main() -> eframe::Result<()> {
    let logger = AppLogger::new(MAX_LOG_ENTRIES);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Grid PDF Generator"),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Grid PDF Generator",
        options,
        Box::new(move |cc| Ok(Box::new(app::GridApp::new(cc, handle, logger)))),
    )
}
