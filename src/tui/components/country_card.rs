// Country card component - the info region
//
// Flag, name, capital, population and languages for a single match.

use super::formatters::format_number;
use crate::countries::Country;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
        .title(Span::styled(" Details ", theme.title_style()));

    let lines = match app.display.info_region() {
        Some(country) => card_lines(country, theme),
        None => Vec::new(),
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Build the card body
pub fn card_lines<'a>(country: &'a Country, theme: &Theme) -> Vec<Line<'a>> {
    let label = Style::default()
        .fg(theme.label)
        .add_modifier(Modifier::BOLD);
    let value = Style::default().fg(theme.fg);

    vec![
        Line::from(vec![
            Span::raw(format!(" {} ", country.flag)),
            Span::styled(
                country.display_name(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", country.flag_url()),
            Style::default().fg(theme.muted),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Capital: ", label),
            Span::styled(country.capitals(), value),
        ]),
        Line::from(vec![
            Span::styled(" Population: ", label),
            Span::styled(format_number(country.population), value),
        ]),
        Line::from(vec![
            Span::styled(" Languages: ", label),
            Span::styled(country.language_names(), value),
        ]),
    ]
}
