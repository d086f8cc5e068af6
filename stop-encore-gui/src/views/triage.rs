use crate::app::StopEncoreApp;
use crate::widgets;

/// Render the triage layout: letter bar and game list on the left, the
/// selected game with its actions and the counters on the right.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp, ctx: &egui::Context) {
    egui::SidePanel::right("detail_panel")
        .resizable(true)
        .default_width(360.0)
        .width_range(320.0..=560.0)
        .show_inside(ui, |ui| {
            widgets::detail_panel::show(ui, app, ctx);
            ui.add_space(8.0);
            ui.separator();
            widgets::counters::show(ui, app);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        widgets::letter_bar::show(ui, app);
        ui.separator();
        widgets::game_list::show(ui, app);
    });
}
