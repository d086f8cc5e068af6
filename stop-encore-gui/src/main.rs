//! stop-encore GUI
//!
//! Desktop frontend for triaging a gamelist. Exports run on a background
//! thread and report progress to the UI over an MPSC channel.

mod app;
mod backend;
mod state;
mod views;
mod widgets;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stop ou Encore")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stop ou Encore",
        options,
        Box::new(|cc| Ok(Box::new(app::StopEncoreApp::new(cc)))),
    )
}
