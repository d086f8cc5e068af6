use crate::app::StopEncoreApp;

/// Shown until a gamelist is loaded.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading("Stop ou Encore");
        ui.add_space(16.0);
        ui.label("Open a folder containing a gamelist.xml to start sorting its games.");
        ui.add_space(16.0);
        if ui.button("Load Gamelist...").clicked() {
            app.pick_and_open();
        }

        // Show recent gamelists
        if !app.settings.recent.is_empty() {
            ui.add_space(24.0);
            ui.separator();
            ui.add_space(8.0);
            ui.label("Recent Gamelists:");
            ui.add_space(4.0);

            let mut open_dir = None;
            for recent in &app.settings.recent {
                let label = format!("{}  ({} games)", recent.path.display(), recent.game_count);
                if ui.button(&label).clicked() {
                    open_dir = Some(recent.path.clone());
                }
            }

            if let Some(dir) = open_dir {
                app.open_dir(dir);
            }
        }
    });
}
