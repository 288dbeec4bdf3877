//! Pagination line and key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use gridkit_engine::GridView;

use crate::app::App;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &GridView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Paging controls are suppressed entirely when pagination is disabled,
    // everything fits on one page, or the loading placeholder is up. The
    // status line shares the row with the controls.
    if !app.loading {
        let mut spans = Vec::new();
        if view.page.controls_visible {
            let page = &view.page;
            if page.has_prev() {
                spans.push(Span::styled("‹ prev  ", theme::title_style().fg(theme::ACCENT)));
            }
            spans.push(Span::styled(
                format!("Page {} of {}", page.current_page, page.total_pages),
                theme::text_style(),
            ));
            spans.push(Span::styled(
                format!("  ({} records)", page.total_items),
                theme::text_muted(),
            ));
            if page.has_next() {
                spans.push(Span::styled("  next ›", theme::title_style().fg(theme::ACCENT)));
            }
        }
        if let Some(status) = &app.status {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(status.clone(), theme::text_muted()));
        }
        if !spans.is_empty() {
            frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
        }
    }

    let hints = Line::from(vec![
        hint_key("Tab"),
        hint_label(" focus  "),
        hint_key("↑/↓"),
        hint_label(" rows  "),
        hint_key("←/→"),
        hint_label(" columns  "),
        hint_key("s"),
        hint_label(" sort  "),
        hint_key("n/p"),
        hint_label(" page  "),
        hint_key("1-9"),
        hint_label(" action  "),
        hint_key("q"),
        hint_label(" quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[1]);
}

fn hint_key(key: &str) -> Span<'_> {
    Span::styled(key, theme::title_style().fg(theme::ACCENT))
}

fn hint_label(label: &str) -> Span<'_> {
    Span::styled(label, theme::text_muted())
}
