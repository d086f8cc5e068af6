//! Core of stop-encore: load an ES-style `gamelist.xml`, tag each game as
//! accepted, rejected or on hold, persist that progress, and export the
//! accepted games with their media.
//!
//! Frontends drive everything through [`Session`]; the individual modules are
//! public so they can be used (and tested) without one.

pub mod catalog;
pub mod error;
pub mod export;
pub mod filter;
pub mod gamelist;
pub mod progress_file;
pub mod record;
pub mod session;
pub mod settings;
pub mod triage;

pub use catalog::Catalog;
pub use error::TriageError;
pub use export::{ExportProgress, ExportSummary, SkipReason, SkippedAsset};
pub use filter::{FilterMode, FilterState, LetterFilter, RowStyle};
pub use progress_file::{RestoreSummary, SavedProgress};
pub use record::GameRecord;
pub use session::Session;
pub use triage::{Bucket, TriageCounts, TriageState, TriageStatus};
