//! The task list screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::domain::keybinding::{Action, Keybind};
use crate::domain::{Notice, Task, TaskId};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ConfirmPopup, FocusContext, FooterBar, FooterBarStyle, InputBar, InputBarAction, InputBarState,
    NoticePopup, TaskListPane, TaskListPaneState,
};

/// Which component receives plain key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The add-task input bar.
    InputBar,
    /// The task list.
    #[default]
    Tasks,
}

/// A dialog capturing all input until resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Two-choice destructive confirmation before removal.
    ConfirmRemove {
        /// Task to remove when confirmed.
        id: TaskId,
        /// Title shown in the prompt.
        title: String,
    },
    /// Blocking informational notice.
    Notice(Notice),
}

/// Store operation (or app transition) requested by a key gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeKeyResult {
    /// Exit the application.
    Quit,
    /// Insert a new task with this title.
    AddTask(String),
    /// Invert the done flag of this task.
    ToggleDone(TaskId),
    /// Removal was confirmed by the user.
    RemoveConfirmed(TaskId),
    /// Commit an edited title.
    SubmitEdit {
        /// Task being edited.
        id: TaskId,
        /// Replacement title.
        title: String,
    },
    /// The gesture only changed view state.
    Consumed,
}

/// View state for the whole screen.
#[derive(Debug, Default)]
pub struct HomeScreenState {
    focus: Focus,
    input_bar: InputBarState,
    pane: TaskListPaneState,
    modal: Option<Modal>,
}

impl HomeScreenState {
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self::default();
        state.set_focus(Focus::InputBar);
        state
    }

    /// Reconciles view state against the store's current sequence.
    pub fn sync_with(&mut self, tasks: &[Task]) {
        self.pane.sync_with(tasks);
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Clears the add-task input, after the store accepted the title.
    pub fn clear_input(&mut self) {
        self.input_bar.clear();
    }

    /// Opens the blocking notice dialog.
    pub fn show_notice(&mut self, notice: Notice) {
        self.modal = Some(Modal::Notice(notice));
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input_bar.set_focused(focus == Focus::InputBar);
    }

    fn focus_context(&self) -> FocusContext {
        if self.modal.is_some() {
            FocusContext::Modal
        } else if self.pane.is_editing() {
            FocusContext::EditingRow
        } else {
            match self.focus {
                Focus::InputBar => FocusContext::InputBar,
                Focus::Tasks => FocusContext::Tasks,
            }
        }
    }

    /// Routes a key press and returns the store operation it implies.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        tasks: &[Task],
        registry: &CommandRegistry,
    ) -> HomeKeyResult {
        // Quit works everywhere, but single-letter quit bindings must
        // not fire while the user is typing text.
        if registry.find_action(key) == Some(Action::Quit) {
            let typing = self.focus == Focus::InputBar || self.pane.is_editing();
            if !typing || key.modifiers.contains(KeyModifiers::CONTROL) {
                return HomeKeyResult::Quit;
            }
        }

        if self.modal.is_some() {
            return self.handle_modal_key(key);
        }

        if self.pane.is_editing() {
            return self.handle_editing_key(key, tasks);
        }

        match self.focus {
            Focus::InputBar => self.handle_input_bar_key(key, registry),
            Focus::Tasks => self.handle_tasks_key(key, tasks, registry),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> HomeKeyResult {
        let Some(modal) = self.modal.as_ref() else {
            return HomeKeyResult::Consumed;
        };

        match modal {
            Modal::Notice(_) => {
                if EventHandler::is_submit_event(&key)
                    || EventHandler::is_cancel_event(&key)
                    || key.code == KeyCode::Char(' ')
                {
                    self.modal = None;
                }
                HomeKeyResult::Consumed
            }
            Modal::ConfirmRemove { id, .. } => {
                let id = *id;
                if matches!(key.code, KeyCode::Char('y' | 'Y'))
                    || EventHandler::is_submit_event(&key)
                {
                    self.modal = None;
                    return HomeKeyResult::RemoveConfirmed(id);
                }
                if matches!(key.code, KeyCode::Char('n' | 'N'))
                    || EventHandler::is_cancel_event(&key)
                {
                    self.modal = None;
                }
                HomeKeyResult::Consumed
            }
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent, tasks: &[Task]) -> HomeKeyResult {
        let Some(row) = self.pane.editing_row_mut() else {
            return HomeKeyResult::Consumed;
        };
        let id = row.task_id();
        let current_title = tasks
            .iter()
            .find(|task| task.id() == id)
            .map(|task| task.title().to_string())
            .unwrap_or_default();

        match key.code {
            KeyCode::Enter => {
                let title = row.draft().trim().to_string();
                if title.is_empty() {
                    // An empty title never lands; treat it as a cancel.
                    row.cancel_edit(&current_title);
                    return HomeKeyResult::Consumed;
                }
                row.commit_edit();
                HomeKeyResult::SubmitEdit { id, title }
            }
            KeyCode::Esc => {
                row.cancel_edit(&current_title);
                HomeKeyResult::Consumed
            }
            _ => {
                row.handle_key(key);
                HomeKeyResult::Consumed
            }
        }
    }

    fn handle_input_bar_key(
        &mut self,
        key: KeyEvent,
        registry: &CommandRegistry,
    ) -> HomeKeyResult {
        if registry.find_action(key) == Some(Action::FocusNext) {
            self.set_focus(Focus::Tasks);
            return HomeKeyResult::Consumed;
        }

        match self.input_bar.handle_key(key) {
            Some(InputBarAction::Submit(title)) => HomeKeyResult::AddTask(title),
            Some(InputBarAction::ExitInput) => {
                self.set_focus(Focus::Tasks);
                HomeKeyResult::Consumed
            }
            None => HomeKeyResult::Consumed,
        }
    }

    fn handle_tasks_key(
        &mut self,
        key: KeyEvent,
        tasks: &[Task],
        registry: &CommandRegistry,
    ) -> HomeKeyResult {
        // Enter on a row acts like tapping it: toggle done.
        if key.code == KeyCode::Enter {
            return self
                .pane
                .selected_id()
                .map_or(HomeKeyResult::Consumed, HomeKeyResult::ToggleDone);
        }

        match registry.find_action(key) {
            Some(Action::NavigateUp) => self.pane.select_up(),
            Some(Action::NavigateDown) => self.pane.select_down(),
            Some(Action::SelectFirst) => self.pane.select_first(),
            Some(Action::SelectLast) => self.pane.select_last(),
            Some(Action::FocusInput | Action::FocusNext) => self.set_focus(Focus::InputBar),
            Some(Action::ToggleDone) => {
                if let Some(id) = self.pane.selected_id() {
                    return HomeKeyResult::ToggleDone(id);
                }
            }
            Some(Action::StartEdit) => {
                self.pane.start_edit_selected(tasks);
            }
            Some(Action::RemoveTask) => {
                if let Some(id) = self.pane.selected_id()
                    && let Some(task) = tasks.iter().find(|task| task.id() == id)
                {
                    self.modal = Some(Modal::ConfirmRemove {
                        id,
                        title: task.title().to_string(),
                    });
                }
            }
            _ => {}
        }
        HomeKeyResult::Consumed
    }
}

/// Stateful widget drawing the whole screen.
pub struct HomeScreen<'a> {
    tasks: &'a [Task],
    done_count: usize,
    theme: &'a Theme,
    registry: &'a CommandRegistry,
}

impl<'a> HomeScreen<'a> {
    #[must_use]
    pub fn new(
        tasks: &'a [Task],
        done_count: usize,
        theme: &'a Theme,
        registry: &'a CommandRegistry,
    ) -> Self {
        Self {
            tasks,
            done_count,
            theme,
            registry,
        }
    }

    fn footer_bindings(&self, context: FocusContext) -> Vec<Keybind> {
        let bind = |action: Action, label: &'static str| -> Option<Keybind> {
            self.registry
                .primary_key(action)
                .map(|key| Keybind::new(key, action, label))
        };
        let fixed = |code: KeyCode, action: Action, label: &'static str| {
            Keybind::new(KeyEvent::new(code, KeyModifiers::NONE), action, label)
        };

        match context {
            FocusContext::Tasks => [
                bind(Action::ToggleDone, "toggle"),
                bind(Action::StartEdit, "edit"),
                bind(Action::RemoveTask, "remove"),
                bind(Action::FocusInput, "add"),
                bind(Action::Quit, "quit"),
            ]
            .into_iter()
            .flatten()
            .collect(),
            FocusContext::InputBar => vec![
                fixed(KeyCode::Enter, Action::FocusInput, "add task"),
                fixed(KeyCode::Esc, Action::Cancel, "clear"),
                fixed(KeyCode::Tab, Action::FocusNext, "tasks"),
            ],
            FocusContext::EditingRow => vec![
                fixed(KeyCode::Enter, Action::StartEdit, "save"),
                fixed(KeyCode::Esc, Action::Cancel, "cancel"),
            ],
            FocusContext::Modal => vec![
                fixed(KeyCode::Char('y'), Action::RemoveTask, "confirm"),
                fixed(KeyCode::Char('n'), Action::Cancel, "cancel"),
            ],
        }
    }
}

impl StatefulWidget for HomeScreen<'_> {
    type State = HomeScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [input_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        InputBar::new(&state.input_bar, self.theme).render(input_area, buf);

        TaskListPane::new(self.tasks, state.focus == Focus::Tasks, self.theme).render(
            list_area,
            buf,
            &mut state.pane,
        );

        let context = state.focus_context();
        let bindings = self.footer_bindings(context);
        let counter = format!("{} tasks · {} done", self.tasks.len(), self.done_count);
        FooterBar::new(&bindings)
            .focus_context(context)
            .right_info(Some(&counter))
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);

        match &state.modal {
            Some(Modal::ConfirmRemove { title, .. }) => {
                let message = format!("Remove \"{title}\"? This cannot be undone.");
                ConfirmPopup::new("Remove task", &message, self.theme).render(area, buf);
            }
            Some(Modal::Notice(notice)) => {
                NoticePopup::new(notice, self.theme).render(area, buf);
            }
            None => {}
        }
    }
}
