// UI rendering logic
//
// One screen: title, search box, the two output regions side by side, and
// the status bar. The toast is drawn last so it overlays everything.

use super::app::App;
use super::components::{country_card, country_list, search_box, status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    // Split the terminal into four vertical sections:
    // - Title (1 line)
    // - Search box (3 lines)
    // - Output regions (fills remaining space)
    // - Status bar (2 lines: top border + text)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    render_title(f, chunks[0], app);
    search_box::render(f, chunks[1], app);

    let regions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    country_list::render(f, regions[0], app);
    country_card::render(f, regions[1], app);

    status_bar::render(f, chunks[3], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, theme);
    }
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(" 🌍 Country Lookup ", app.theme.title_style()),
        Span::styled(
            format!("v{}", crate::config::VERSION),
            Style::default().fg(app.theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}
