//! Color scheme and styling helpers for the grid UI.

use gridkit_types::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Accent color for focus indicators and the active sort column.
pub const ACCENT: Color = Color::Rgb(193, 74, 122);

/// Primary foreground color for cell text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground for hints, labels, and empty states.
pub const FG_MUTED: Color = Color::Rgb(168, 168, 175);

/// Border color for unfocused panels.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Background for the selected row.
pub const BG_SELECT: Color = Color::Rgb(38, 24, 32);

/// Destructive-action color.
pub const DANGER: Color = Color::Rgb(220, 96, 110);

/// Warning color for non-destructive confirmations.
pub const WARN: Color = Color::Rgb(216, 164, 85);

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default().fg(FG).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(FG)
}

pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

pub fn row_highlight_style() -> Style {
    Style::default().bg(BG_SELECT).add_modifier(Modifier::BOLD)
}

/// Border/title color for a confirmation surface of the given severity.
pub fn severity_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Info => ACCENT,
        Severity::Warning => WARN,
        Severity::Danger => DANGER,
    };
    Style::default().fg(color)
}
