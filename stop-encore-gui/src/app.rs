use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use stop_encore_core::settings::{self, Settings};
use stop_encore_core::{Bucket, Session, TriageError};

use crate::backend;
use crate::state::{AppMessage, BackgroundOperation, MediaState, Notice};
use crate::views;
use crate::widgets;

/// Main application state.
pub struct StopEncoreApp {
    /// The loaded gamelist, if any.
    pub session: Option<Session>,

    /// Persistent user settings (last directories, recent gamelists).
    pub settings: Settings,

    /// Active background operations (shown in activity bar).
    pub operations: Vec<BackgroundOperation>,

    /// Receiver for messages from background threads.
    pub message_rx: mpsc::Receiver<AppMessage>,

    /// Sender cloned into background threads.
    pub message_tx: mpsc::Sender<AppMessage>,

    /// Preview images by absolute path.
    pub media: HashMap<PathBuf, MediaState>,

    /// Messages waiting to be acknowledged, oldest first.
    pub notices: Vec<Notice>,

    /// Set while asking whether to replace an existing progress file.
    pub confirm_overwrite: Option<PathBuf>,

    pub about_open: bool,

    /// Scroll the game list to the selection on the next frame.
    pub scroll_to_selected: bool,
}

impl StopEncoreApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let (tx, rx) = mpsc::channel();
        Self {
            session: None,
            settings: settings::load_settings(),
            operations: Vec::new(),
            message_rx: rx,
            message_tx: tx,
            media: HashMap::new(),
            notices: Vec::new(),
            confirm_overwrite: None,
            about_open: false,
            scroll_to_selected: false,
        }
    }

    /// Drain all pending messages from background threads.
    fn process_messages(&mut self) {
        while let Ok(msg) = self.message_rx.try_recv() {
            crate::state::handle_message(self, msg);
        }
    }

    /// Returns true if any background operations are active.
    pub fn has_active_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Whether a modal dialog is open; the main view ignores input meanwhile.
    pub fn is_dialog_open(&self) -> bool {
        !self.notices.is_empty() || self.confirm_overwrite.is_some() || self.about_open
    }

    pub fn notify(&mut self, title: &str, message: impl Into<String>) {
        self.notices.push(Notice::new(title, message));
    }

    // -- File menu actions --

    /// Ask for a directory and load its gamelist.
    pub fn pick_and_open(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Select the gamelist folder");
        if let Some(ref last) = self.settings.last_source_dir {
            dialog = dialog.set_directory(last);
        }
        if let Some(dir) = dialog.pick_folder() {
            self.open_dir(dir);
        }
    }

    /// Replace the current session with the gamelist in `dir`.
    pub fn open_dir(&mut self, dir: PathBuf) {
        match Session::open(&dir) {
            Ok(session) => {
                let catalog = session.catalog();
                self.settings
                    .remember_source(catalog.source_dir(), catalog.len());
                if let Err(e) = settings::save_settings(&self.settings) {
                    log::warn!("Failed to save settings: {}", e);
                }
                self.session = Some(session);
                self.media.clear();
                self.scroll_to_selected = true;
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", dir.display(), e);
                self.notify("Error", e.to_string());
            }
        }
    }

    pub fn save_progress(&mut self, overwrite: bool) {
        let Some(session) = self.session.as_ref() else {
            self.notify("Error", "Load a gamelist first.");
            return;
        };
        match session.save_progress(overwrite) {
            Ok(path) => self.notify("Progress saved", format!("Saved to {}", path.display())),
            Err(TriageError::ProgressExists(path)) => self.confirm_overwrite = Some(path),
            Err(e) => self.notify("Error", e.to_string()),
        }
    }

    pub fn load_progress(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.notify("Error", "Load a gamelist first.");
            return;
        };
        match session.load_progress() {
            Ok(Some(summary)) => {
                let mut message = format!("Restored {} tags.", summary.restored);
                if summary.dropped > 0 {
                    message.push_str(&format!(
                        "\n{} saved games are no longer in the gamelist.",
                        summary.dropped
                    ));
                }
                self.scroll_to_selected = true;
                self.notify("Progress loaded", message);
            }
            Ok(None) => {
                let path = session.progress_path();
                self.notify("Error", format!("No progress file at {}", path.display()));
            }
            Err(e) => self.notify("Error", e.to_string()),
        }
    }

    /// Ask for a destination and export the accepted games in the background.
    pub fn pick_and_export(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_ref() else {
            self.notify("Error", "Load a gamelist first.");
            return;
        };
        if session.counts().accepted == 0 {
            self.notify("Error", TriageError::NothingToExport.to_string());
            return;
        }

        let mut dialog = rfd::FileDialog::new().set_title("Select the export folder");
        if let Some(ref last) = self.settings.last_export_dir {
            dialog = dialog.set_directory(last);
        }
        if let Some(dest) = dialog.pick_folder() {
            self.settings.remember_export(&dest);
            if let Err(e) = settings::save_settings(&self.settings) {
                log::warn!("Failed to save settings: {}", e);
            }
            backend::export::start_export(self, dest, ctx);
        }
    }

    // -- Triage actions --

    /// Tag the selected game. Ignored while an export is running.
    pub fn classify_selected(&mut self, bucket: Bucket) {
        if self.has_active_operations() {
            return;
        }
        if let Some(session) = self.session.as_mut()
            && session.classify_selected(bucket).is_some()
        {
            self.scroll_to_selected = true;
        }
    }

    /// Move the selection by `delta` rows, staying within the list.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(session) = self.session.as_mut() {
            let last = session.visible().len().saturating_sub(1);
            let row = session.selected().saturating_add_signed(delta).min(last);
            if session.select(row) {
                self.scroll_to_selected = true;
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.session.is_none() || self.is_dialog_open() || ctx.wants_keyboard_input() {
            return;
        }

        let (accept, reject, hold, up, down) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::A),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
            )
        });

        if accept {
            self.classify_selected(Bucket::Accepted);
        } else if reject {
            self.classify_selected(Bucket::Rejected);
        } else if hold {
            self.classify_selected(Bucket::Hold);
        } else if up {
            self.move_selection(-1);
        } else if down {
            self.move_selection(1);
        }
    }
}

impl eframe::App for StopEncoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain background messages
        self.process_messages();

        // Schedule repaint while operations are running
        if self.has_active_operations() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            views::menu::show(ui, self, ctx);
        });

        // Activity bar (bottom, only when operations active)
        if self.has_active_operations() {
            egui::TopBottomPanel::bottom("activity_bar").show(ctx, |ui| {
                widgets::activity_bar::show(ui, &self.operations);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_some() {
                views::triage::show(ui, self, ctx);
            } else {
                views::welcome::show(ui, self);
            }
        });

        views::dialogs::show(ctx, self);
    }
}
