use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,

    // Navigation / Focus
    FocusInput,
    FocusTasks,
    FocusNext,
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,

    // Task actions
    ToggleDone,
    StartEdit,
    RemoveTask,

    // Input
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
