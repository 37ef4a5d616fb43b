//! The presentation capability the controller drives.
//!
//! # Design
//! The core never draws anything. A host implements `View` on top of
//! whatever toolkit it has (a terminal, a browser DOM, a test recorder) and
//! the controller tells it which panel to show and which rows to render.

use crate::form::Draft;
use crate::types::Student;

/// The single exclusive display mode of the list area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Loading,
    Error,
    Empty,
    Populated,
}

impl UiState {
    /// True once a list fetch has resolved, i.e. the loading panel is hidden.
    pub fn is_terminal(self) -> bool {
        !matches!(self, UiState::Loading)
    }
}

pub trait View {
    /// Show the panel for `state` and hide the other three.
    fn show_state(&mut self, state: UiState);

    /// Replace the whole row set. Every row passed in has an id.
    fn render_rows(&mut self, rows: &[Student]);

    fn show_modal(&mut self, title: &str, draft: &Draft);

    fn hide_modal(&mut self);

    /// Blocking notification.
    fn alert(&mut self, message: &str);

    /// Synchronous yes/no prompt.
    fn confirm(&mut self, message: &str) -> bool;
}
