use crate::app::StopEncoreApp;
use crate::state::row_color;
use stop_encore_core::RowStyle;

/// Live totals per bucket.
pub fn show(ui: &mut egui::Ui, app: &StopEncoreApp) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let counts = session.counts();

    egui::Grid::new("counters")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            counter_row(ui, "Total", counts.total, None);
            counter_row(ui, "Accepted", counts.accepted, row_color(RowStyle::Accepted));
            counter_row(ui, "Rejected", counts.rejected, row_color(RowStyle::Rejected));
            counter_row(ui, "On Hold", counts.hold, row_color(RowStyle::Hold));
            counter_row(ui, "Untagged", counts.untagged, None);
        });
}

fn counter_row(ui: &mut egui::Ui, label: &str, value: usize, color: Option<egui::Color32>) {
    let mut text = egui::RichText::new(label);
    if let Some(color) = color {
        text = text.color(color);
    }
    ui.label(text);
    ui.label(value.to_string());
    ui.end_row();
}
