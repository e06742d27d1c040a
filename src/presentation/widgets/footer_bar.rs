use crate::domain::keybinding::Keybind;
use crate::presentation::commands::format_key;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Tasks,
    InputBar,
    EditingRow,
    Modal,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tasks => "TASKS",
            Self::InputBar => "ADD",
            Self::EditingRow => "EDIT",
            Self::Modal => "CONFIRM",
        }
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            focus_indicator: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus_context: FocusContext,
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus_context: FocusContext::default(),
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn focus_context(mut self, context: FocusContext) -> Self {
        self.focus_context = context;
        self
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        spans.push(Span::styled(
            format!(" {} ", self.focus_context.display_name()),
            self.style.focus_indicator,
        ));

        for bind in self.keybindings.iter().filter(|b| b.visible_in_bar) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", format_key(bind.key)),
                self.style.key_style,
            ));
            spans.push(Span::styled(format!(" {}", bind.label), self.style.info));
        }

        Paragraph::new(Line::from(spans))
            .style(self.style.background)
            .render(area, buf);

        if let Some(info) = self.right_info {
            let info_width = u16::try_from(info.width()).unwrap_or(0);
            if info_width + 1 <= area.width {
                let x = area.x + area.width - info_width - 1;
                buf.set_string(x, area.y, info, self.style.info);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_render_shows_context_and_counter() {
        let binds = vec![Keybind::new(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            Action::ToggleDone,
            "toggle",
        )];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds)
            .focus_context(FocusContext::Tasks)
            .right_info(Some("2 tasks · 1 done"))
            .render(area, &mut buf);

        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.contains("TASKS"));
        assert!(text.contains("toggle"));
        assert!(text.contains("2 tasks"));
    }

    #[test]
    fn test_hidden_bindings_are_skipped() {
        let binds = vec![Keybind::new(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            Action::SelectFirst,
            "first",
        )
        .hidden()];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&binds).render(area, &mut buf);

        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(!text.contains("first"));
    }
}
