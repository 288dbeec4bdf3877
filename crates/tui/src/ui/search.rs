//! Search bar feeding the filter stage.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused));
    let inner = block.inner(area);

    let query = app.grid.query();
    let content = if query.is_empty() && !focused {
        Paragraph::new("Type / to search").style(theme::text_muted())
    } else {
        Paragraph::new(query).style(theme::text_style())
    };
    frame.render_widget(block, area);
    frame.render_widget(content, inner);

    if focused {
        // Input only ever appends or pops, so the cursor sits at the end.
        let x = inner.x + query.width().min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
