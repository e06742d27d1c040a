//! Main application orchestrator.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::domain::{AddError, Notice, TaskList};
use crate::infrastructure::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{HomeKeyResult, HomeScreen, HomeScreenState};

/// Owns the task store and the screen, and applies gestures to the
/// store.
pub struct App {
    tasks: TaskList,
    screen: HomeScreenState,
    registry: CommandRegistry,
    theme: Theme,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let registry = CommandRegistry::with_overrides(&config.keybindings);
        let theme = Theme::new(&config.theme.accent_color);

        let mut screen = HomeScreenState::new();
        let tasks = TaskList::new();
        screen.sync_with(tasks.tasks());

        Self {
            tasks,
            screen,
            registry,
            theme,
            should_quit: false,
        }
    }

    /// Runs the blocking event loop until quit.
    ///
    /// # Errors
    /// Returns an error if terminal drawing or event polling fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let events = EventHandler::new();

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            if let Some(event) = events.poll()? {
                if self.handle_event(&event) == EventResult::Exit {
                    self.should_quit = true;
                }
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    /// Applies one key press to the screen and the store.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let result = self
            .screen
            .handle_key(key, self.tasks.tasks(), &self.registry);

        match result {
            HomeKeyResult::Quit => return EventResult::Exit,
            HomeKeyResult::AddTask(title) => match self.tasks.add(title) {
                Ok(id) => {
                    debug!(id = %id, "added task from input bar");
                    self.screen.clear_input();
                }
                Err(AddError::DuplicateTitle(title)) => {
                    self.screen.show_notice(Notice::duplicate_title(&title));
                }
            },
            HomeKeyResult::ToggleDone(id) => self.tasks.toggle_done(id),
            HomeKeyResult::RemoveConfirmed(id) => self.tasks.remove(id),
            HomeKeyResult::SubmitEdit { id, title } => self.tasks.edit(id, title),
            HomeKeyResult::Consumed => {}
        }

        self.screen.sync_with(self.tasks.tasks());
        EventResult::Continue
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(
            HomeScreen::new(
                self.tasks.tasks(),
                self.tasks.done_count(),
                &self.theme,
                &self.registry,
            ),
            frame.area(),
            &mut self.screen,
        );
    }

    /// Read access for assertions and the render layer.
    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::ui::home_screen::Modal;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_task(app: &mut App, title: &str) {
        type_str(app, title);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_add_task_through_input_bar() {
        let mut app = app();

        add_task(&mut app, "Buy milk");

        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks().tasks()[0].title(), "Buy milk");
        assert!(!app.tasks().tasks()[0].done());
    }

    #[test]
    fn test_duplicate_add_shows_warning_and_keeps_input() {
        let mut app = app();
        add_task(&mut app, "Buy milk");

        add_task(&mut app, "Buy milk");

        assert_eq!(app.tasks().len(), 1);
        assert!(matches!(app.screen.modal(), Some(Modal::Notice(_))));

        // Acknowledge; the rejected title is still in the input bar.
        press(&mut app, KeyCode::Enter);
        assert!(app.screen.modal().is_none());
        assert_eq!(app.tasks().len(), 1);
    }

    #[test]
    fn test_ctrl_c_exits() {
        let mut app = app();
        let result = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_full_scenario_through_gestures() {
        let mut app = app();

        // Add, then reject the duplicate.
        add_task(&mut app, "Buy milk");
        add_task(&mut app, "Buy milk");
        assert_eq!(app.tasks().len(), 1);
        press(&mut app, KeyCode::Enter); // dismiss warning
        press(&mut app, KeyCode::Esc); // clear leftover input
        press(&mut app, KeyCode::Esc); // leave the input bar

        // Toggle done.
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks().tasks()[0].done());

        // Done rows refuse editing.
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.tasks().tasks()[0].title(), "Buy milk");

        // Un-done, then edit the title.
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' ')); // round-trip toggle
        assert!(app.tasks().tasks()[0].done());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.tasks().tasks()[0].done());

        press(&mut app, KeyCode::Char('e'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "oat milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks().tasks()[0].title(), "Buy oat milk");

        // Remove with confirmation.
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.tasks().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_toggle_gesture_after_removal_selects_neighbor() {
        let mut app = app();
        add_task(&mut app, "a");
        add_task(&mut app, "b");
        press(&mut app, KeyCode::Esc); // input is empty: leave the bar

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.tasks().len(), 1);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.tasks().tasks()[0].done());
    }
}
