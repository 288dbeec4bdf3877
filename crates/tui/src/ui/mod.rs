//! View composition: search bar, grid, footer, and modal overlays.

mod footer;
mod grid;
mod modal;
mod search;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, Modal};

/// Draw one frame from the current app state.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = app.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(3),    // grid
            Constraint::Length(2), // footer: page line + hints
        ])
        .split(frame.area());

    search::render(frame, chunks[0], app);
    grid::render(frame, chunks[1], app, &view);
    footer::render(frame, chunks[2], app, &view);

    match app.modal.clone() {
        Modal::Confirm => modal::render_confirmation(frame, frame.area(), app),
        Modal::Detail(record) => modal::render_detail(frame, frame.area(), &record),
        Modal::None => {}
    }
}

/// Centered rectangle sized as a percentage of the parent, used for modal
/// surfaces.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    use crate::app::CommandSink;
    use gridkit_types::{Column, FilterConfig, PaginationConfig, TableConfig};

    fn sample_app() -> App {
        let sink: CommandSink = Arc::default();
        let config = TableConfig::new(vec![
            Column::new("name", "Name").sortable(true),
            Column::new("price", "Price").sortable(true),
        ]);
        let records = (1..=10)
            .map(|i| json!({"name": format!("row-{i:02}"), "price": i}))
            .collect();
        App::new(
            records,
            config,
            FilterConfig::keys(["name"]),
            PaginationConfig::page_size(8),
            sink,
        )
    }

    fn rendered(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn idle_view_shows_rows_and_page_controls() {
        let mut app = sample_app();
        let text = rendered(&mut app);
        assert!(text.contains("row-01"));
        assert!(text.contains("Page 1 of 2"));
    }

    #[test]
    fn loading_suppresses_rows_and_pagination() {
        let mut app = sample_app();
        app.set_loading(true);
        let text = rendered(&mut app);
        assert!(text.contains("Loading records"));
        assert!(!text.contains("row-01"));
        assert!(!text.contains("Page 1 of 2"));
    }

    #[test]
    fn status_shows_alongside_page_controls() {
        let mut app = sample_app();
        app.status = Some("Record deleted".to_string());
        let text = rendered(&mut app);
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("Record deleted"));
    }
}
