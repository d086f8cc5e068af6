use egui_extras::{Column, TableBuilder};

use crate::app::StopEncoreApp;
use crate::state::{SELECTED_ROW_COLOR, row_color};

/// Render the filtered game list, colored by bucket.
pub fn show(ui: &mut egui::Ui, app: &mut StopEncoreApp) {
    let scroll_to_selected = std::mem::take(&mut app.scroll_to_selected);
    let Some(session) = app.session.as_mut() else {
        return;
    };

    // Pre-extract row data to avoid borrowing issues
    let row_data: Vec<RowData> = session
        .visible_records()
        .map(|record| RowData {
            name: record.name().to_string(),
            path: record.path().to_string(),
            color: row_color(session.row_style(record)),
        })
        .collect();
    let selected = session.selected();

    ui.label(format!(
        "{} | showing {} of {}",
        session.filter().mode,
        row_data.len(),
        session.catalog().len()
    ));
    ui.add_space(2.0);

    if row_data.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No games match this filter.");
        });
        return;
    }

    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(320.0).at_least(120.0)) // Name
        .column(Column::remainder().at_least(80.0)) // Path
        .min_scrolled_height(0.0)
        .max_scroll_height(available_height);
    if scroll_to_selected {
        table = table.scroll_to_row(selected, Some(egui::Align::Center));
    }

    let mut clicked_row = None;
    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("File");
            });
        })
        .body(|body| {
            body.rows(text_height, row_data.len(), |mut row| {
                let row_idx = row.index();
                let data = &row_data[row_idx];
                let is_selected = row_idx == selected;

                let mut clicked = false;
                row.col(|ui| {
                    if is_selected {
                        ui.painter()
                            .rect_filled(ui.max_rect(), 0.0, SELECTED_ROW_COLOR);
                    }
                    let mut text = egui::RichText::new(&data.name);
                    if is_selected {
                        text = text.color(egui::Color32::BLACK).strong();
                    } else if let Some(color) = data.color {
                        text = text.color(color);
                    }
                    let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
                    clicked |= response.clicked();
                });
                row.col(|ui| {
                    let response = ui.add(
                        egui::Label::new(egui::RichText::new(&data.path).weak())
                            .sense(egui::Sense::click()),
                    );
                    clicked |= response.clicked();
                });

                if clicked {
                    clicked_row = Some(row_idx);
                }
            });
        });

    if let Some(row) = clicked_row {
        session.select(row);
    }
}

struct RowData {
    name: String,
    path: String,
    color: Option<egui::Color32>,
}
