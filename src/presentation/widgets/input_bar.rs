use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use super::line_edit::LineEdit;
use crate::presentation::theme::Theme;

const PLACEHOLDER_TEXT: &str = "What needs doing?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBarAction {
    /// Submit the typed title for insertion.
    Submit(String),
    /// Leave the input bar.
    ExitInput,
}

/// The add-task input bar at the top of the screen.
#[derive(Debug, Default)]
pub struct InputBarState {
    editor: LineEdit,
    focused: bool,
}

impl InputBarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.editor.value()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.editor.set_value(value);
    }

    pub fn clear(&mut self) {
        self.editor.clear();
    }

    /// Handles a key while the bar is focused.
    ///
    /// Enter submits the trimmed title (blank input submits nothing).
    /// Esc clears a non-empty buffer, or asks to leave the bar when it
    /// is already empty. The typed text is NOT cleared on submit; the
    /// caller clears it once the store accepts the title, so a
    /// rejected duplicate stays visible for correction.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputBarAction> {
        match key.code {
            KeyCode::Enter => {
                let title = self.editor.value().trim().to_string();
                if title.is_empty() {
                    return None;
                }
                Some(InputBarAction::Submit(title))
            }
            KeyCode::Esc => {
                if self.editor.is_empty() {
                    Some(InputBarAction::ExitInput)
                } else {
                    self.editor.clear();
                    None
                }
            }
            _ => {
                self.editor.handle_key(key);
                None
            }
        }
    }
}

pub struct InputBar<'a> {
    state: &'a InputBarState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    #[must_use]
    pub fn new(state: &'a InputBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.state.focused {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Add task ");

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.state.editor.is_empty() && !self.state.focused {
            let placeholder: String = PLACEHOLDER_TEXT
                .chars()
                .take(inner.width as usize)
                .collect();
            buf.set_string(inner.x, inner.y, placeholder, self.theme.dimmed_style);
            return;
        }

        let cursor_style = if self.state.focused {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default()
        };
        self.state
            .editor
            .render_line(inner, buf, self.theme.base_style, cursor_style);
    }
}
