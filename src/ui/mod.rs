// Terminal UI module using ratatui

mod app;
mod tui;
mod widgets;

pub use app::App;
pub use tui::{Tui, TuiOutcome};
