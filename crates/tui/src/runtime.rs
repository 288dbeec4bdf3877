//! Terminal lifecycle and the synchronous event loop.
//!
//! The engine is event-driven with no background work, so the loop is a
//! plain read-dispatch-redraw cycle: block on the next crossterm event,
//! translate it into a [`Msg`] for the current focus/modal context, apply
//! it, and redraw.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::app::{App, Effect, Focus, Modal, Msg};
use crate::ui;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

pub fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    tracing::debug!("grid ui started");
    let result = event_loop(&mut terminal, &mut app);
    cleanup_terminal(&mut terminal)?;
    tracing::debug!("grid ui stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                let Some(msg) = map_key(app, key) else {
                    continue;
                };
                for effect in app.update(msg) {
                    match effect {
                        Effect::Quit => return Ok(()),
                    }
                }
            }
            // A redraw happens at the top of the loop either way.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}

/// Translate a key event into a message for the current context. Modals
/// capture input first, so a second action click can never open a second
/// confirmation.
fn map_key(app: &App, key: KeyEvent) -> Option<Msg> {
    match &app.modal {
        Modal::Confirm => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(Msg::ConfirmToggle),
            KeyCode::Enter => Some(Msg::ConfirmResolve),
            KeyCode::Esc => Some(Msg::ModalClose),
            _ => None,
        },
        Modal::Detail(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Msg::ModalClose),
            _ => None,
        },
        Modal::None => match app.focus {
            Focus::Search => match key.code {
                KeyCode::Tab | KeyCode::Enter => Some(Msg::FocusNext),
                KeyCode::Esc => Some(Msg::SearchClear),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchChar(c)),
                _ => None,
            },
            Focus::Grid => match key.code {
                KeyCode::Tab | KeyCode::Char('/') => Some(Msg::FocusNext),
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Up => Some(Msg::MoveRow(-1)),
                KeyCode::Down => Some(Msg::MoveRow(1)),
                KeyCode::Left => Some(Msg::MoveColumn(-1)),
                KeyCode::Right => Some(Msg::MoveColumn(1)),
                KeyCode::Char('s') => Some(Msg::SortSelected),
                KeyCode::Char('n') | KeyCode::PageDown => Some(Msg::NextPage),
                KeyCode::Char('p') | KeyCode::PageUp => Some(Msg::PrevPage),
                KeyCode::Home => Some(Msg::FirstPage),
                KeyCode::Char(c @ '1'..='9') => {
                    Some(Msg::ActionPressed(c as usize - '1' as usize))
                }
                _ => None,
            },
        },
    }
}
