// Terminal UI implementation using ratatui
// Browse the catalog, filter it, page through it, heart things

pub mod app;
pub mod help_ui;
pub mod runner;
pub mod ui;

pub use app::{App, InputMode};
pub use runner::run_tui;
