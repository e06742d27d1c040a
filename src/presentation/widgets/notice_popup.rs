use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::confirm_popup::centered;
use crate::domain::{Notice, NoticeLevel};
use crate::presentation::theme::Theme;

/// Blocking informational dialog; dismissed with a single key.
pub struct NoticePopup<'a> {
    notice: &'a Notice,
    theme: &'a Theme,
}

impl<'a> NoticePopup<'a> {
    #[must_use]
    pub fn new(notice: &'a Notice, theme: &'a Theme) -> Self {
        Self { notice, theme }
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notice.title);
        let message = &self.notice.message;

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(4).min(10).max(5);

        let popup_area = centered(area, width, height);
        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let color = match self.notice.level {
            NoticeLevel::Info => self.theme.accent,
            NoticeLevel::Warn => Color::Yellow,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));

        let para = Paragraph::new(vec![
            Line::from(message.as_str()),
            Line::default(),
            Line::styled("Press Enter to dismiss", self.theme.dimmed_style),
        ])
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Reset));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_duplicate_warning() {
        let theme = Theme::default();
        let notice = Notice::duplicate_title("Buy milk");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        NoticePopup::new(&notice, &theme).render(area, &mut buf);

        let row_text = |y: u16| -> String {
            (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
        };
        let all: String = (0..area.height).map(row_text).collect();
        assert!(all.contains("Task already exists"));
    }
}
