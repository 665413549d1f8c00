//! Latest-news widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Widget for rendering the latest news under the town panel
pub struct NewsWidget<'a> {
    messages: &'a [String],
    theme: &'a Theme,
}

impl<'a> NewsWidget<'a> {
    pub fn new(messages: &'a [String], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for NewsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.messages.is_empty() {
            String::new()
        } else {
            self.messages.join("  ")
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(self.theme.text))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.theme.border)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}
