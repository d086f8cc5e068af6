use std::path::PathBuf;

use stop_encore_core::{ExportSummary, RowStyle};

use crate::app::StopEncoreApp;

// -- Row colors --

/// Text color for a row in the game list. `None` keeps the theme default.
pub fn row_color(style: RowStyle) -> Option<egui::Color32> {
    match style {
        RowStyle::Plain => None,
        RowStyle::Accepted => Some(egui::Color32::from_rgb(50, 180, 50)),
        RowStyle::Rejected => Some(egui::Color32::from_rgb(220, 50, 50)),
        RowStyle::Hold => Some(egui::Color32::from_rgb(230, 140, 20)),
        RowStyle::DuplicateUntagged => Some(egui::Color32::from_rgb(230, 110, 180)),
    }
}

/// Background of the selected row.
pub const SELECTED_ROW_COLOR: egui::Color32 = egui::Color32::from_rgb(240, 220, 60);

// -- Media --

/// Load state of a game's preview image, keyed by absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaState {
    Loading,
    /// Bytes registered with egui under this URI.
    Ready(String),
    Missing,
}

// -- Dialogs --

/// A blocking message shown until the user dismisses it.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

// -- Background operations --

pub struct BackgroundOperation {
    pub id: u64,
    pub description: String,
    pub progress_current: u64,
    pub progress_total: u64,
    pub current_item: Option<String>,
}

impl BackgroundOperation {
    pub fn new(id: u64, description: String) -> Self {
        Self {
            id,
            description,
            progress_current: 0,
            progress_total: 0,
            current_item: None,
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        if self.progress_total == 0 {
            0.0
        } else {
            self.progress_current as f32 / self.progress_total as f32
        }
    }
}

// -- Messages --

static NEXT_OP_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_operation_id() -> u64 {
    NEXT_OP_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
}

/// Messages sent from background threads to the UI thread.
pub enum AppMessage {
    OperationProgress {
        op_id: u64,
        current: u64,
        total: u64,
        item: Option<String>,
    },

    ExportComplete {
        dest: PathBuf,
        result: Result<ExportSummary, String>,
    },

    MediaLoaded {
        path: PathBuf,
        uri: Option<String>,
    },

    OperationComplete {
        op_id: u64,
    },
}

pub fn handle_message(app: &mut StopEncoreApp, msg: AppMessage) {
    match msg {
        AppMessage::OperationProgress {
            op_id,
            current,
            total,
            item,
        } => {
            if let Some(op) = app.operations.iter_mut().find(|op| op.id == op_id) {
                op.progress_current = current;
                op.progress_total = total;
                if item.is_some() {
                    op.current_item = item;
                }
            }
        }

        AppMessage::ExportComplete { dest, result } => match result {
            Ok(summary) => {
                log::info!(
                    "Exported {} games to {} ({} files, {} skipped)",
                    summary.games,
                    dest.display(),
                    summary.files_copied,
                    summary.skipped.len()
                );
                let mut message = format!(
                    "Exported {} games and {} files to\n{}",
                    summary.games,
                    summary.files_copied,
                    dest.display()
                );
                if !summary.skipped.is_empty() {
                    message.push_str(&format!(
                        "\n\n{} referenced files could not be copied.",
                        summary.skipped.len()
                    ));
                }
                app.notices.push(Notice::new("Export complete", message));
            }
            Err(error) => {
                log::warn!("Export to {} failed: {}", dest.display(), error);
                app.notices.push(Notice::new("Export failed", error));
            }
        },

        AppMessage::MediaLoaded { path, uri } => {
            let state = match uri {
                Some(uri) => MediaState::Ready(uri),
                None => MediaState::Missing,
            };
            app.media.insert(path, state);
        }

        AppMessage::OperationComplete { op_id } => {
            app.operations.retain(|op| op.id != op_id);
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
