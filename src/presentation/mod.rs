//! Presentation layer with UI components and event handling.

/// Key to action command registry.
pub mod commands;
/// Event handling.
pub mod events;
/// Color theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
