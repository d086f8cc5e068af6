use stop_encore_core::FilterMode;

use crate::app::StopEncoreApp;

/// Render the File / Filter / Help menu bar.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp, ctx: &egui::Context) {
    let loaded = app.session.is_some();
    let exporting = app.has_active_operations();

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Load Gamelist...").clicked() {
                ui.close_menu();
                app.pick_and_open();
            }
            ui.separator();
            if ui
                .add_enabled(loaded, egui::Button::new("Save Progress"))
                .clicked()
            {
                ui.close_menu();
                app.save_progress(false);
            }
            if ui
                .add_enabled(loaded && !exporting, egui::Button::new("Load Progress"))
                .clicked()
            {
                ui.close_menu();
                app.load_progress();
            }
            ui.separator();
            if ui
                .add_enabled(
                    loaded && !exporting,
                    egui::Button::new("Export Accepted Games..."),
                )
                .clicked()
            {
                ui.close_menu();
                app.pick_and_export(ctx);
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.add_enabled_ui(loaded, |ui| {
            ui.menu_button("Filter", |ui| {
                let Some(session) = app.session.as_mut() else {
                    return;
                };
                let current = session.filter().mode;
                for mode in FilterMode::ALL {
                    if ui.radio(current == mode, mode.label()).clicked() {
                        session.set_filter_mode(mode);
                        app.scroll_to_selected = true;
                        ui.close_menu();
                    }
                }
            });
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                app.about_open = true;
                ui.close_menu();
            }
        });
    });
}
