// main.rs - Langton's Ant with interactive camera and settings

use eframe::egui;

mod ant;
mod error;
mod grid;
mod settings;
mod sim;
mod ui;

use ui::LangtonApp;

const GRID_ROWS: i32 = 512;
const GRID_COLS: i32 = 512;
const ANT_START: (i32, i32) = (25, 25);

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!(
        "starting Langton's Ant on a {}x{} grid, ant at {:?}",
        GRID_ROWS,
        GRID_COLS,
        ANT_START
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Langton's Ant",
        options,
        Box::new(|_cc| {
            Box::new(LangtonApp::new(
                GRID_ROWS,
                GRID_COLS,
                ANT_START.0,
                ANT_START.1,
            ))
        }),
    )
}
