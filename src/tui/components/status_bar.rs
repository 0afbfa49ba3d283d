// Status bar component
//
// Renders the bottom line: current display state, lookups so far, key hints
// and the most recent log message.

use crate::logging::LogLevel;
use crate::search::DisplayState;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let state = match &app.display {
        DisplayState::Empty => "idle".to_string(),
        DisplayState::List(countries) => format!("{} matches", countries.len()),
        DisplayState::Card(_) => "1 match".to_string(),
        DisplayState::Error => "no match".to_string(),
    };

    let mut spans = vec![Span::styled(
        format!(
            " {} │ 🔎 {} │ Esc quit · Ctrl+U clear · Ctrl+Y copy HTML",
            state, app.results_shown
        ),
        Style::default().fg(theme.status_bar),
    )];

    if let Some(entry) = app.log_buffer.latest() {
        let color = match entry.level {
            LogLevel::Error => theme.failure,
            LogLevel::Warn => theme.warning,
            LogLevel::Info => theme.info,
            LogLevel::Debug | LogLevel::Trace => theme.muted,
        };
        spans.push(Span::styled(
            format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style(false)),
    );

    f.render_widget(status, area);
}
