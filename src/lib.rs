//! Oxitask - a lightweight terminal to-do list.
//!
//! This crate provides an interactive to-do screen with clean
//! architecture: an in-memory task store in the domain layer and a
//! ratatui interface on top.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the task entity and store.
pub mod domain;
/// Infrastructure layer containing configuration adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "oxitask";
