use crate::app::StopEncoreApp;

/// Render whichever modal is active: overwrite confirmation, the oldest
/// pending notice, or the about box.
pub fn show(ctx: &egui::Context, app: &mut StopEncoreApp) {
    if let Some(path) = app.confirm_overwrite.clone() {
        let mut answer = None;
        modal("Overwrite progress?").show(ctx, |ui| {
            ui.label(format!(
                "A progress file already exists:\n{}\n\nReplace it?",
                path.display()
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Overwrite").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });
        match answer {
            Some(true) => {
                app.confirm_overwrite = None;
                app.save_progress(true);
            }
            Some(false) => app.confirm_overwrite = None,
            None => {}
        }
        return;
    }

    if let Some(notice) = app.notices.first() {
        let mut dismissed = false;
        modal(&notice.title).show(ctx, |ui| {
            ui.label(&notice.message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed {
            app.notices.remove(0);
        }
        return;
    }

    if app.about_open {
        let mut open = true;
        modal("About")
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading("Stop ou Encore");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.label("Sort a gamelist into games to keep, drop or revisit,");
                ui.label("then export the keepers with their media.");
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Keys: A accept, R reject, H hold, arrows move").weak());
            });
        app.about_open = open;
    }
}

fn modal<'open>(title: &str) -> egui::Window<'open> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}
