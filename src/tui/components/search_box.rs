// Search box component
//
// Single-line text field. It always has focus, so the cursor is parked at
// the end of the text.

use crate::tui::app::App;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search for any country...";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(Span::styled(" Country ", theme.title_style()));

    let line = if app.query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)))
    } else {
        Line::from(Span::styled(app.query.as_str(), Style::default().fg(theme.fg)))
    };

    // Keep the tail of long input visible
    let inner_width = area.width.saturating_sub(2);
    let text_width = app.query.width() as u16;
    let scroll = text_width.saturating_sub(inner_width.saturating_sub(1));

    f.render_widget(Paragraph::new(line).block(block).scroll((0, scroll)), area);

    let cursor_x = area.x + 1 + (text_width - scroll).min(inner_width.saturating_sub(1));
    f.set_cursor_position(Position::new(cursor_x, area.y + 1));
}
