// TUI module for the timeline browser and search palette
mod app;
mod dates;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::sync::Arc;

use anyhow::Result;
pub use app::App;
use terminal::TerminalGuard;

use crate::models::Note;
use crate::search::{ItemSource, SearchSession};

/// Run the interactive TUI
pub fn run_interactive(notes: Vec<Note>, source: Arc<dyn ItemSource>) -> Result<()> {
    let mut guard = TerminalGuard::new()?;

    let search = SearchSession::new(source);
    let mut app = App::new(notes, search);
    let res = app.run(guard.terminal_mut());

    guard.restore()?;
    res
}
