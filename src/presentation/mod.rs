//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the active app's page with ratatui and translates
//! keyboard input into the named operations on the application state.

pub mod input;
pub mod ui;

pub use input::*;
pub use ui::*;
