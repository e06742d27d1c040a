//! Scrollable task list with selection.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
};

use super::task_row::{TaskRow, TaskRowState};
use crate::domain::entities::{Task, TaskId};
use crate::presentation::theme::Theme;

const EMPTY_HINT: &str = "Nothing to do. Press 'a' to add a task.";

/// Selection, scrolling and per-row presenter state for the list.
#[derive(Debug, Default)]
pub struct TaskListPaneState {
    rows: Vec<TaskRowState>,
    selected: usize,
    scroll_offset: usize,
}

impl TaskListPaneState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles row states against the store's current sequence.
    ///
    /// Rows are matched by task id so an in-progress edit survives a
    /// redraw; rows for removed tasks are dropped and viewing rows
    /// re-seed their drafts from the (possibly edited) titles.
    pub fn sync_with(&mut self, tasks: &[Task]) {
        let mut old_rows: Vec<TaskRowState> = std::mem::take(&mut self.rows);

        self.rows = tasks
            .iter()
            .map(|task| {
                let existing = old_rows
                    .iter()
                    .position(|row| row.task_id() == task.id())
                    .map(|i| old_rows.swap_remove(i));
                match existing {
                    Some(mut row) => {
                        row.sync_title(task.title());
                        row
                    }
                    None => TaskRowState::new(task),
                }
            })
            .collect();

        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the id of the selected task, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.rows.get(self.selected).map(TaskRowState::task_id)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Returns the row currently in Editing state, if any.
    #[must_use]
    pub fn editing_row_mut(&mut self) -> Option<&mut TaskRowState> {
        self.rows.iter_mut().find(|row| row.is_editing())
    }

    /// Returns true while any row is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.rows.iter().any(TaskRowState::is_editing)
    }

    /// Puts the selected row into Editing state.
    ///
    /// Refused for done tasks and when nothing is selected.
    pub fn start_edit_selected(&mut self, tasks: &[Task]) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        let Some(task) = tasks.iter().find(|task| task.id() == id) else {
            return false;
        };
        if task.done() {
            return false;
        }

        if let Some(row) = self.rows.get_mut(self.selected) {
            row.start_edit();
            return true;
        }
        false
    }

    fn clamp_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.selected - viewport_height + 1;
        }
    }
}

/// Stateful widget drawing the task rows.
pub struct TaskListPane<'a> {
    tasks: &'a [Task],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TaskListPane<'a> {
    #[must_use]
    pub fn new(tasks: &'a [Task], focused: bool, theme: &'a Theme) -> Self {
        Self {
            tasks,
            focused,
            theme,
        }
    }
}

impl StatefulWidget for TaskListPane<'_> {
    type State = TaskListPaneState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.tasks.is_empty() {
            let hint: String = EMPTY_HINT.chars().take(area.width as usize).collect();
            buf.set_string(area.x + 2, area.y, hint, self.theme.dimmed_style);
            return;
        }

        state.clamp_scroll(area.height as usize);

        let visible = self
            .tasks
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(area.height as usize);

        for (index, task) in visible {
            let Some(row_state) = state.rows.get(index) else {
                continue;
            };
            let y = area.y + u16::try_from(index - state.scroll_offset).unwrap_or(0);
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            };
            let selected = self.focused && index == state.selected;
            TaskRow::new(task, row_state, selected, self.theme).render(row_area, buf);
        }
    }
}
