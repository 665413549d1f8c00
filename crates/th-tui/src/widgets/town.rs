//! Town panel widget - the main view

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use th_core::town::Town;

use crate::theme::Theme;

/// Widget for rendering the town panel: a description of the current
/// town followed by the action menu.
pub struct TownWidget<'a> {
    town: &'a Town,
    theme: &'a Theme,
}

impl<'a> TownWidget<'a> {
    pub fn new(town: &'a Town, theme: &'a Theme) -> Self {
        Self { town, theme }
    }

    fn menu_line(&self, pre: &'static str, key: &'static str, post: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(pre, Style::default().fg(self.theme.text)),
            Span::styled(key, Style::default().fg(self.theme.header)),
            Span::styled(post, Style::default().fg(self.theme.text)),
        ])
    }
}

impl Widget for TownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mood_color = if self.town.is_tough() {
            self.theme.bad
        } else {
            self.theme.good
        };

        let lines = vec![
            Line::from(Span::styled(
                self.town.description(),
                Style::default().fg(self.theme.accent),
            )),
            Line::from(Span::styled(
                self.town.mood(),
                Style::default().fg(mood_color),
            )),
            Line::from(""),
            self.menu_line("  ", "(B)", "uy something at the shop."),
            self.menu_line("  ", "(S)", "ell something at the shop."),
            self.menu_line("  ", "(E)", "xplore surrounding terrain."),
            self.menu_line("  ", "(M)", "ove on to a different town."),
            self.menu_line("  ", "(L)", "ook for trouble!"),
            self.menu_line("  ", "(D)", "ig for gold"),
            self.menu_line("  ", "(H)", "unt for treasure"),
            self.menu_line("  Give up the hunt and e", "(X)", "it."),
            Line::from(""),
            Line::from(Span::styled(
                "What's your next move?",
                Style::default().fg(self.theme.text_dim),
            )),
        ];

        let block = Block::default()
            .title(" Treasure Hunter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));

        let paragraph = Paragraph::new(lines).block(block);
        paragraph.render(area, buf);
    }
}
