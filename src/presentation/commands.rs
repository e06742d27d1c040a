use crate::domain::keybinding::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::FocusNext,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusInput,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusInput,
            KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            true,
        );
        register(
            Action::SelectFirst,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::SelectLast,
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            true,
        );
        register(
            Action::SelectLast,
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            false,
        );

        register(
            Action::ToggleDone,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            true,
        );
        register(
            Action::StartEdit,
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::RemoveTask,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::RemoveTask,
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            false,
        );

        register(
            Action::Cancel,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    /// Builds the default registry with config-file overrides applied.
    ///
    /// Each override rebinds an action to the parsed key; entries that
    /// fail to parse are skipped with a warning.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        for (spec, action) in overrides {
            let Some(key) = parse_key(spec) else {
                tracing::warn!(key = %spec, "ignoring unparseable keybinding override");
                continue;
            };
            registry.display_bindings.insert(*action, key);
            registry.input_bindings.push((key, *action));
        }

        registry
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .rev()
            .find(|(bound, _)| bound.code == key.code && bound.modifiers == key.modifiers)
            .map(|(_, action)| *action)
    }

    /// Returns the primary key bound to an action, for display.
    #[must_use]
    pub fn primary_key(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Returns a short display label for an action's primary key.
    #[must_use]
    pub fn key_label(&self, action: Action) -> String {
        self.primary_key(action).map_or_else(String::new, format_key)
    }
}

/// Formats a key event as a compact label ("Ctrl+C", "Esc", "Space").
#[must_use]
pub fn format_key(key: KeyEvent) -> String {
    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let code = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };
    parts.push(code);

    parts.join("+")
}

/// Parses a "Ctrl+q" / "Alt+Enter" / "F1" style key spec.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code = None;

    for part in spec.split('+') {
        let part = part.trim();
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "tab" => code = Some(KeyCode::Tab),
            "space" => code = Some(KeyCode::Char(' ')),
            "backspace" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            lower => {
                if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    code = Some(KeyCode::F(n));
                } else {
                    let mut chars = part.chars();
                    let c = chars.next()?;
                    if chars.next().is_some() {
                        return None;
                    }
                    if c.is_uppercase() {
                        modifiers |= KeyModifiers::SHIFT;
                    }
                    code = Some(KeyCode::Char(c));
                }
            }
        }
    }

    code.map(|code| KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_finds_actions() {
        let registry = CommandRegistry::default();

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::ToggleDone)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::NavigateDown)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_parse_key_specs() {
        assert_eq!(
            parse_key("Ctrl+q"),
            Some(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            parse_key("Alt+Enter"),
            Some(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))
        );
        assert_eq!(
            parse_key("F1"),
            Some(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE))
        );
        assert_eq!(
            parse_key("x"),
            Some(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
        );
        assert_eq!(parse_key("Ctrl+"), None);
        assert_eq!(parse_key("nope"), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("Ctrl+q".to_string(), Action::Quit);
        overrides.insert("x".to_string(), Action::RemoveTask);

        let registry = CommandRegistry::with_overrides(&overrides);

        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::RemoveTask)
        );
        // Defaults remain bound.
        assert_eq!(
            registry.find_action(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
            Some(Action::RemoveTask)
        );
    }

    #[test]
    fn test_format_key_labels() {
        assert_eq!(
            format_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "Ctrl+C"
        );
        assert_eq!(
            format_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            "Space"
        );
        assert_eq!(
            format_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            "Esc"
        );
    }
}
