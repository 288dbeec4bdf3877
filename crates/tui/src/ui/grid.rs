//! The grid body: header row, data rows, empty and loading states.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use gridkit_engine::{EmptyKind, GridView};
use gridkit_types::{Align, SortDirection};

use crate::app::{App, Focus};
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App, view: &GridView) {
    let focused = app.focus == Focus::Grid;
    let block = Block::default()
        .title("Records")
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.loading {
        let placeholder = Paragraph::new("Loading records…")
            .style(theme::text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    if let Some(kind) = view.empty {
        let message = app.empty_message.clone().unwrap_or_else(|| {
            match kind {
                EmptyKind::NoData => "No records to display".to_string(),
                EmptyKind::NoMatches => "No results match your search".to_string(),
            }
        });
        let empty = Paragraph::new(message)
            .style(theme::text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let show_actions = app.config.show_actions;
    let column_count = app.config.columns.len() + usize::from(show_actions);

    let mut headers: Vec<Cell> = app
        .config
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mut label = column.header.clone();
            if app.grid.sort().key.as_deref() == Some(column.key.as_str()) {
                label.push_str(match app.grid.sort().direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                });
            }
            let style = if focused && i == app.selected_column {
                theme::header_style().fg(theme::ACCENT)
            } else {
                theme::header_style()
            };
            Cell::from(aligned(label, column.align)).style(style)
        })
        .collect();
    if show_actions {
        headers.push(
            Cell::from(aligned(
                app.config.actions_label.clone(),
                app.config.actions_align,
            ))
            .style(theme::header_style()),
        );
    }

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Cell> = row
                .cells
                .iter()
                .zip(&app.config.columns)
                .map(|(text, column)| {
                    Cell::from(aligned(text.clone(), column.align)).style(theme::text_style())
                })
                .collect();
            if show_actions {
                let strip = row
                    .actions
                    .iter()
                    .map(|&position| {
                        let action = &app.config.actions[position];
                        match &action.icon {
                            Some(icon) => format!("{} {icon}", position + 1),
                            None => format!("{} {}", position + 1, action.label),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                cells.push(
                    Cell::from(aligned(strip, app.config.actions_align)).style(theme::text_muted()),
                );
            }
            Row::new(cells)
        })
        .collect();

    // Explicit widths win; remaining columns share the rest evenly.
    let widths: Vec<Constraint> = app
        .config
        .columns
        .iter()
        .map(|column| match column.width {
            Some(w) => Constraint::Length(w),
            None => Constraint::Fill(1),
        })
        .chain(show_actions.then_some(Constraint::Fill(1)))
        .collect();
    debug_assert_eq!(widths.len(), column_count);

    let mut table_state = ratatui::widgets::TableState::default();
    table_state.select(Some(app.selected_row));
    let table = Table::new(rows, widths)
        .header(Row::new(headers).style(theme::title_style()))
        .column_spacing(1)
        .row_highlight_style(theme::row_highlight_style());
    frame.render_stateful_widget(table, inner, &mut table_state);
}

fn aligned(text: String, align: Align) -> Text<'static> {
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    };
    Text::from(text).alignment(alignment)
}
