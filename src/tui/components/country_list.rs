// Country list component - the list region
//
// One row per match: flag emoji and name. Empty whenever the display state
// is not a list.

use crate::countries::Country;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let countries = app.display.list_region();

    let title = if countries.is_empty() {
        " Matches ".to_string()
    } else {
        format!(" Matches ({}) ", countries.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Span::styled(title, theme.title_style()));

    let items: Vec<ListItem> = countries
        .iter()
        .map(|c| ListItem::new(row(c, theme)))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn row<'a>(country: &'a Country, theme: &Theme) -> Line<'a> {
    let flag = if country.flag.is_empty() {
        "  ".to_string()
    } else {
        country.flag.clone()
    };
    Line::from(vec![
        Span::raw(format!(" {} ", flag)),
        Span::styled(country.display_name(), Style::default().fg(theme.fg)),
        Span::styled(
            format!("  {}", country.flag_url()),
            Style::default().fg(theme.muted),
        ),
    ])
}
