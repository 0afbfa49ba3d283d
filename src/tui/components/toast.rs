//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content, with the
//! border colored by notification level.

use crate::search::{Notification, NotifyLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    pub level: NotifyLevel,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn new(notification: Notification, duration: Duration) -> Self {
        Self::message(notification.message(), notification.level(), duration)
    }

    /// Toast with free-form text, for UI feedback that isn't a lookup outcome
    pub fn message(message: impl Into<String>, level: NotifyLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let color = theme.notify_color(self.level);
        let label = format!(" {} ", self.level.as_str());

        // Display width, not byte length, so emoji and CJK stay inside the box.
        // Add 4 for padding (2 chars each side) and border
        let wanted = (self.message.width() as u16 + 4).max(label.width() as u16 + 4);
        let width = wanted.min(area.width.saturating_sub(4));
        let inner = width.saturating_sub(2).max(1);
        let lines = (self.message.width() as u16).div_ceil(inner).max(1);
        let height = (lines + 2).min(area.height); // text + 2 for borders

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);

        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(Line::from(self.message.as_str()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
