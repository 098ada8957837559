#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use raster_paint::{DrawingSession, PaintApp, SessionConfig};

const TOOLS_PANEL_WIDTH: f32 = 200.0;

// When compiling natively:
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional path to a JSON session config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let session = DrawingSession::new(config)?;

    let canvas = [
        session.buffer().width() as f32 + TOOLS_PANEL_WIDTH + 32.0,
        session.buffer().height() as f32 + 32.0,
    ];
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(canvas)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Raster Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, session)))),
    )?;
    Ok(())
}
