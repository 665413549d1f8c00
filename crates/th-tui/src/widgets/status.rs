//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use th_core::hunter::Hunter;
use th_core::town::Town;

use crate::theme::Theme;

/// Widget for rendering the two-line hunter status
pub struct StatusWidget<'a> {
    hunter: &'a Hunter,
    town: &'a Town,
    towns_visited: u32,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(hunter: &'a Hunter, town: &'a Town, towns_visited: u32, theme: &'a Theme) -> Self {
        Self {
            hunter,
            town,
            towns_visited,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let h = self.hunter;

        // Line 1: name, gold, what the hunter carries
        let line1 = format!(
            "{} $:{} Kit: {} Treasures: {}",
            h.name(),
            h.gold(),
            h.equipment_listing(),
            h.treasure_listing(),
        );

        // Line 2: where the hunter is and what is left to do here
        let mut line2 = format!("Town {}: {}", self.towns_visited, self.town.terrain());
        if self.town.is_tough() {
            line2.push_str(" Rough");
        }
        if self.town.has_dug() {
            line2.push_str(" Dug");
        }
        if self.town.has_searched() {
            line2.push_str(" Searched");
        }

        let style = Style::default().fg(self.theme.text);
        buf.set_string(area.x, area.y, &line1, style);
        if area.height > 1 {
            buf.set_string(area.x, area.y + 1, &line2, style);
        }
    }
}
