use std::path::PathBuf;

use stop_encore_core::ExportProgress;
use stop_encore_core::export::export_accepted;

use crate::app::StopEncoreApp;
use crate::backend::worker::spawn_background_op;
use crate::state::AppMessage;

/// Export the accepted games to `dest` on a background thread.
///
/// The thread works on a snapshot of the catalog and tags, so triage can
/// not change what is being exported.
pub fn start_export(app: &mut StopEncoreApp, dest: PathBuf, ctx: &egui::Context) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let catalog = session.catalog().clone();
    let triage = session.triage().clone();
    let description = format!("Exporting {} games", catalog.system_name());
    let ctx = ctx.clone();

    spawn_background_op(app, description, move |op_id, tx| {
        let on_progress = |progress: ExportProgress| {
            let update = match progress {
                ExportProgress::Started { total } => Some((0, total, None)),
                ExportProgress::Exported { done, total, name } => Some((done, total, Some(name))),
                ExportProgress::Copying { .. } | ExportProgress::Done => None,
            };
            if let Some((current, total, item)) = update {
                let _ = tx.send(AppMessage::OperationProgress {
                    op_id,
                    current: current as u64,
                    total: total as u64,
                    item,
                });
                ctx.request_repaint();
            }
        };

        let result = export_accepted(&catalog, &triage, &dest, &on_progress).map_err(|e| e.to_string());

        let _ = tx.send(AppMessage::ExportComplete { dest, result });
        let _ = tx.send(AppMessage::OperationComplete { op_id });
        ctx.request_repaint();
    });
}
