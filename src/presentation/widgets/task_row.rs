//! Per-task row presenter.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::line_edit::LineEdit;
use crate::domain::entities::{Task, TaskId};
use crate::presentation::theme::Theme;

/// The row's two view states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Showing the task title.
    #[default]
    Viewing,
    /// Editing a draft of the title.
    Editing,
}

/// View state for one task row.
///
/// Holds the editing state machine and the draft buffer. The draft
/// tracks the task title whenever the row is Viewing and is freely
/// editable only while Editing.
#[derive(Debug)]
pub struct TaskRowState {
    task_id: TaskId,
    mode: RowMode,
    draft: LineEdit,
}

impl TaskRowState {
    #[must_use]
    pub fn new(task: &Task) -> Self {
        let mut draft = LineEdit::new();
        draft.set_value(task.title());
        Self {
            task_id: task.id(),
            mode: RowMode::Viewing,
            draft,
        }
    }

    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    #[must_use]
    pub const fn mode(&self) -> RowMode {
        self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        self.draft.value()
    }

    /// Re-seeds the draft from the task title while not editing.
    pub fn sync_title(&mut self, title: &str) {
        if self.mode == RowMode::Viewing && self.draft.value() != title {
            self.draft.set_value(title);
        }
    }

    /// Enters Editing. The caller is responsible for refusing this on
    /// done tasks; the row itself only tracks the state machine.
    pub fn start_edit(&mut self) {
        self.mode = RowMode::Editing;
    }

    /// Leaves Editing, discarding the draft in favor of the current
    /// title.
    pub fn cancel_edit(&mut self, title: &str) {
        self.mode = RowMode::Viewing;
        self.draft.set_value(title);
    }

    /// Leaves Editing and returns the draft for submission.
    pub fn commit_edit(&mut self) -> String {
        self.mode = RowMode::Viewing;
        self.draft.value().to_string()
    }

    /// Routes a key into the draft editor while Editing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.mode != RowMode::Editing {
            return false;
        }
        self.draft.handle_key(key);
        true
    }
}

/// Renders one task row on a single line.
pub struct TaskRow<'a> {
    task: &'a Task,
    state: &'a TaskRowState,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> TaskRow<'a> {
    #[must_use]
    pub fn new(task: &'a Task, state: &'a TaskRowState, selected: bool, theme: &'a Theme) -> Self {
        Self {
            task,
            state,
            selected,
            theme,
        }
    }

    fn marker(&self) -> (&'static str, Style) {
        if self.task.done() {
            ("[x] ", Style::default().fg(Color::Green))
        } else {
            ("[ ] ", Style::default().fg(Color::Gray))
        }
    }
}

impl Widget for TaskRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let pointer = if self.selected { "❯ " } else { "  " };
        buf.set_string(area.x, area.y, pointer, self.theme.selection_style);

        let (marker, marker_style) = self.marker();
        let marker_x = area.x + 2;
        buf.set_string(marker_x, area.y, marker, marker_style);

        let text_area = Rect {
            x: marker_x + 4,
            y: area.y,
            width: area.width.saturating_sub(6),
            height: 1,
        };

        if self.state.is_editing() {
            let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
            self.state.draft.render_line(
                text_area,
                buf,
                Style::default().fg(self.theme.accent),
                cursor_style,
            );
        } else {
            let style = if self.task.done() {
                self.theme.done_style
            } else if self.selected {
                self.theme.selection_style
            } else {
                self.theme.base_style
            };
            let title: String = self
                .task
                .title()
                .chars()
                .take(text_area.width as usize)
                .collect();
            buf.set_string(text_area.x, text_area.y, title, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn task() -> Task {
        Task::new(1_u64, "Buy milk")
    }

    #[test]
    fn test_row_starts_viewing_with_title_draft() {
        let state = TaskRowState::new(&task());
        assert_eq!(state.mode(), RowMode::Viewing);
        assert_eq!(state.draft(), "Buy milk");
    }

    #[test]
    fn test_edit_commit_returns_draft() {
        let mut state = TaskRowState::new(&task());
        state.start_edit();

        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        state.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        for c in "oat milk".chars() {
            state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        assert_eq!(state.commit_edit(), "Buy oat milk");
        assert_eq!(state.mode(), RowMode::Viewing);
    }

    #[test]
    fn test_cancel_restores_title() {
        let mut state = TaskRowState::new(&task());
        state.start_edit();
        state.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_ne!(state.draft(), "Buy milk");

        state.cancel_edit("Buy milk");

        assert_eq!(state.mode(), RowMode::Viewing);
        assert_eq!(state.draft(), "Buy milk");
    }

    #[test]
    fn test_sync_title_only_while_viewing() {
        let mut state = TaskRowState::new(&task());

        state.sync_title("Renamed");
        assert_eq!(state.draft(), "Renamed");

        state.start_edit();
        state.sync_title("Other");
        assert_eq!(state.draft(), "Renamed");
    }

    #[test]
    fn test_keys_ignored_while_viewing() {
        let mut state = TaskRowState::new(&task());
        assert!(!state.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(state.draft(), "Buy milk");
    }

    #[test]
    fn test_render_done_marker() {
        let done_task = task().toggled();
        let state = TaskRowState::new(&done_task);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        TaskRow::new(&done_task, &state, false, &theme).render(area, &mut buf);

        assert_eq!(buf[(2, 0)].symbol(), "[");
        assert_eq!(buf[(3, 0)].symbol(), "x");
    }
}
