use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Theme;

/// Two-choice destructive confirmation dialog.
pub struct ConfirmPopup<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ConfirmPopup<'a> {
    #[must_use]
    pub fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            theme,
        }
    }
}

impl Widget for ConfirmPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.title);

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(self.message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(4).min(10).max(5);

        let popup_area = centered(area, width, height);
        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::Red));

        let choices = Line::from(vec![
            Span::styled(
                "[Y] Remove",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[N] Cancel", self.theme.dimmed_style),
        ]);

        let para = Paragraph::new(vec![
            Line::from(self.message),
            Line::default(),
            choices,
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Reset));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

/// Centers a `width` x `height` rect inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 40, 6);
        assert_eq!(rect, Rect::new(20, 9, 40, 6));
    }

    #[test]
    fn test_render_draws_choices() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        ConfirmPopup::new("Remove task", "Remove \"Buy milk\"?", &theme).render(area, &mut buf);

        let content: String = (0..area.width)
            .flat_map(|x| (0..area.height).map(move |y| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(content.contains('Y'));
        assert!(content.contains('N'));
    }
}
