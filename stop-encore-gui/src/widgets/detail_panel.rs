use stop_encore_core::{Bucket, TriageStatus};

use crate::app::StopEncoreApp;
use crate::backend;
use crate::state::{MediaState, row_color};

/// Largest size the preview image is drawn at.
const PREVIEW_SIZE: f32 = 300.0;

/// Render the selected game with its image and the triage buttons.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp, ctx: &egui::Context) {
    ui.heading("Details");
    ui.separator();

    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(record) = session.selected_record() else {
        ui.label("No game selected.");
        return;
    };

    let name = record.name().to_string();
    let file = record.path().to_string();
    let region = record.region().to_string();
    let description = record.description().to_string();
    let image_path = record.image().map(|image| session.catalog().resolve(image));
    let status = session.status_of(record);
    let style = session.row_style(record);

    let mut name_text = egui::RichText::new(&name).strong().size(16.0);
    if let Some(color) = row_color(style) {
        name_text = name_text.color(color);
    }
    ui.label(name_text);
    detail_row(ui, "File", &file);
    detail_row(ui, "Region", &region);
    detail_row(
        ui,
        "Status",
        match status {
            TriageStatus::Tagged(bucket) => bucket.label(),
            TriageStatus::Untagged => "Untagged",
        },
    );
    ui.add_space(6.0);

    // Image
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(PREVIEW_SIZE), PREVIEW_SIZE),
        egui::Sense::hover(),
    );
    let media = image_path.as_ref().map(|path| app.media.get(path).cloned());
    match media {
        Some(Some(MediaState::Ready(uri))) => {
            egui::Image::new(uri)
                .max_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE))
                .paint_at(ui, rect);
        }
        Some(Some(MediaState::Loading)) => {
            ui.put(rect, egui::Spinner::new());
        }
        Some(None) => {
            if let Some(path) = image_path {
                app.media.insert(path.clone(), MediaState::Loading);
                backend::media::load_image(app.message_tx.clone(), ctx.clone(), path);
            }
        }
        Some(Some(MediaState::Missing)) | None => {
            ui.put(
                rect,
                egui::Label::new(egui::RichText::new("No image available").weak()),
            );
        }
    }
    ui.add_space(6.0);

    // Actions
    let enabled = !app.has_active_operations();
    ui.horizontal(|ui| {
        ui.add_enabled_ui(enabled, |ui| {
            for bucket in Bucket::ALL {
                let label = match bucket {
                    Bucket::Accepted => "Accept (A)",
                    Bucket::Rejected => "Reject (R)",
                    Bucket::Hold => "Hold (H)",
                };
                let mut text = egui::RichText::new(label);
                if let Some(color) = row_color(style_for(bucket)) {
                    text = text.color(color);
                }
                if ui.button(text).clicked() {
                    app.classify_selected(bucket);
                }
            }
        });
    });
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Description").strong());
    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 140.0).max(60.0))
        .show(ui, |ui| {
            ui.label(&description);
        });
}

fn style_for(bucket: Bucket) -> stop_encore_core::RowStyle {
    match bucket {
        Bucket::Accepted => stop_encore_core::RowStyle::Accepted,
        Bucket::Rejected => stop_encore_core::RowStyle::Rejected,
        Bucket::Hold => stop_encore_core::RowStyle::Hold,
    }
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{}:", label)).weak());
        ui.label(value);
    });
}
