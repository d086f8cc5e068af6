use stop_encore_core::LetterFilter;

use crate::app::StopEncoreApp;

/// Row of first-letter buttons: All, 0-9, A-Z.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let current = session.filter().letter;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for letter in LetterFilter::choices() {
            if ui
                .selectable_label(current == letter, letter.label())
                .clicked()
                && current != letter
            {
                session.set_letter(letter);
                app.scroll_to_selected = true;
            }
        }
    });
}
