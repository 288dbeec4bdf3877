//! # Gridkit TUI
//!
//! Terminal rendering adapter for the gridkit data-grid engine. The app
//! follows a message/update loop: key events map to [`app::Msg`] values,
//! [`app::App::update`] mutates state and reports [`app::Effect`]s, and the
//! view functions redraw from the engine's per-cycle [`GridView`] snapshot.
//!
//! The engine stays pure and synchronous; everything interactive (focus,
//! row/column selection, the confirmation and detail modals) lives here.
//!
//! [`GridView`]: gridkit_engine::GridView

pub mod app;
mod runtime;
mod theme;
mod ui;

use anyhow::Result;

use crate::app::App;

/// Run the grid UI until the user quits. Owns the terminal lifecycle.
pub fn run(app: App) -> Result<()> {
    runtime::run_app(app)
}
