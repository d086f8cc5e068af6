pub mod dialogs;
pub mod menu;
pub mod triage;
pub mod welcome;
