//! Modal overlays: the confirmation surface and the record detail view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use serde_json::Value;

use gridkit_engine::pending_confirmation;
use gridkit_types::{CellValue, Severity};

use crate::app::{App, ConfirmChoice};
use crate::theme;
use crate::ui::centered_rect;

/// The confirmation surface for the pending destructive action. Title,
/// description, and severity come from the action's `ConfirmationConfig`.
pub fn render_confirmation(frame: &mut Frame, parent: Rect, app: &App) {
    let Some(config) = pending_confirmation(&app.config.actions, app.grid.pending()) else {
        return;
    };
    let area = centered_rect(50, 35, parent);
    let border = theme::severity_style(config.severity);
    let block = Block::default()
        .title(Span::styled(config.title.clone(), border))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(&block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // description
            Constraint::Length(1), // spacer
            Constraint::Length(1), // buttons
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let description = Paragraph::new(config.description.clone())
        .style(theme::text_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[0]);

    let confirm_label = match config.severity {
        Severity::Danger => "Delete",
        _ => "Confirm",
    };
    let buttons = Line::from(vec![
        button("Cancel", app.confirm_choice == ConfirmChoice::Cancel),
        Span::raw("   "),
        button(confirm_label, app.confirm_choice == ConfirmChoice::Confirm),
    ]);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), chunks[2]);

    let hints = Line::from(vec![
        Span::styled("←/→/Tab", theme::title_style().fg(theme::ACCENT)),
        Span::styled(" choose  ", theme::text_muted()),
        Span::styled("Enter", theme::title_style().fg(theme::ACCENT)),
        Span::styled(" resolve  ", theme::text_muted()),
        Span::styled("Esc", theme::title_style().fg(theme::ACCENT)),
        Span::styled(" cancel", theme::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[3]);
}

/// Read-only field-by-field view of one record.
pub fn render_detail(frame: &mut Frame, parent: Rect, record: &Value) {
    let area = centered_rect(60, 60, parent);
    let block = Block::default()
        .title(Span::styled("Record", theme::title_style().fg(theme::ACCENT)))
        .borders(Borders::ALL)
        .border_style(theme::border_style(true));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(&block, area);

    let lines: Vec<Line> = match record {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                Line::from(vec![
                    Span::styled(format!("{key}: "), theme::title_style()),
                    Span::styled(CellValue::from(value).to_string(), theme::text_style()),
                ])
            })
            .collect(),
        other => vec![Line::from(Span::styled(other.to_string(), theme::text_style()))],
    };
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

fn button(label: &str, focused: bool) -> Span<'_> {
    let style = if focused {
        theme::header_style().fg(theme::ACCENT)
    } else {
        theme::text_muted()
    };
    Span::styled(format!("[ {label} ]"), style)
}
