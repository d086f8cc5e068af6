use std::path::PathBuf;
use std::sync::mpsc;

use crate::state::AppMessage;

/// Read an image on a background thread and register its bytes with egui.
///
/// Sends `MediaLoaded` with the URI to draw, or `None` when the file could
/// not be read.
pub fn load_image(tx: mpsc::Sender<AppMessage>, ctx: egui::Context, path: PathBuf) {
    std::thread::spawn(move || {
        let uri = match std::fs::read(&path) {
            Ok(bytes) => {
                let uri = format!("bytes://media/{}", path.display());
                // Register before sending so the bytes exist when the UI renders.
                ctx.include_bytes(uri.clone(), bytes);
                Some(uri)
            }
            Err(e) => {
                log::debug!("Image unavailable {}: {}", path.display(), e);
                None
            }
        };

        let _ = tx.send(AppMessage::MediaLoaded { path, uri });
        ctx.request_repaint();
    });
}
