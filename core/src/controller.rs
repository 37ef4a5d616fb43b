//! The view controller: owns the list state and the add/edit modal.
//!
//! # Design
//! All state changes go through the named transitions below. The server is
//! the only source of truth: every successful mutation is followed by a full
//! `refresh`, and the row set is thrown away and rebuilt each time. Failures
//! never trigger a refresh; a failed list fetch shows the error panel and a
//! failed mutation raises a blocking notification.
//!
//! Requests run to completion one at a time on the caller's thread, so the
//! controller needs no locking.

use tracing::{error, info, warn};

use crate::api::StudentApi;
use crate::form::{ClickTarget, Field, Modal};
use crate::http::Transport;
use crate::types::{Student, StudentId};
use crate::view::{UiState, View};

pub const CREATE_FAILED: &str = "Failed to create student.";
pub const UPDATE_FAILED: &str = "Failed to update student.";
pub const DELETE_FAILED: &str = "Failed to delete student.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this student?";

pub struct Controller<T, V> {
    api: StudentApi<T>,
    view: V,
    state: UiState,
    rows: Vec<Student>,
    modal: Modal,
}

impl<T: Transport, V: View> Controller<T, V> {
    pub fn new(api: StudentApi<T>, view: V) -> Self {
        Self {
            api,
            view,
            state: UiState::Loading,
            rows: Vec::new(),
            modal: Modal::default(),
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.state
    }

    /// Rows currently rendered. Every entry has an id.
    pub fn rows(&self) -> &[Student] {
        &self.rows
    }

    pub fn row(&self, id: &StudentId) -> Option<&Student> {
        self.rows.iter().find(|s| s.id.as_ref() == Some(id))
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn api(&self) -> &StudentApi<T> {
        &self.api
    }

    pub fn start(&mut self) {
        self.refresh();
    }

    /// Re-fetches the list and resolves the UI to Error, Empty or Populated.
    pub fn refresh(&mut self) {
        self.set_state(UiState::Loading);

        let resolved = match self.api.list_students() {
            Ok(students) if students.is_empty() => {
                self.rows.clear();
                UiState::Empty
            }
            Ok(students) => {
                let total = students.len();
                self.rows = students.into_iter().filter(|s| s.id.is_some()).collect();
                if self.rows.len() < total {
                    warn!(skipped = total - self.rows.len(), "skipping students without an id");
                }
                UiState::Populated
            }
            Err(e) => {
                error!(error = %e, "error fetching students");
                self.rows.clear();
                UiState::Error
            }
        };

        self.view.render_rows(&self.rows);
        self.set_state(resolved);
    }

    pub fn open_create(&mut self) {
        self.modal.open_create();
        self.view.show_modal(self.modal.title(), self.modal.draft());
    }

    pub fn open_edit(&mut self, student: Student) {
        self.modal.open_edit(student);
        self.view.show_modal(self.modal.title(), self.modal.draft());
    }

    /// Opens the modal for the rendered row with `id`. Returns false when no
    /// such row is on screen.
    pub fn edit_row(&mut self, id: &StudentId) -> bool {
        match self.row(id).cloned() {
            Some(student) => {
                self.open_edit(student);
                true
            }
            None => false,
        }
    }

    /// User typed into a form field. Ignored while the modal is hidden.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.modal.is_open() {
            self.modal.draft_mut().set(field, value);
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.view.hide_modal();
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Overlay && self.modal.is_open() {
            self.close_modal();
        }
    }

    /// Sends the draft as an update when it carries an id, else as a create.
    pub fn submit(&mut self) {
        if !self.modal.is_open() {
            return;
        }

        let payload = match self.modal.draft().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "rejecting student form");
                self.view.alert(&format!("Invalid student: {e}."));
                return;
            }
        };

        let (result, failure) = match self.modal.draft().target() {
            Some(id) => (self.api.update_student(&id, &payload), UPDATE_FAILED),
            None => (self.api.create_student(&payload), CREATE_FAILED),
        };

        match result {
            Ok(()) => {
                info!(name = %payload.name, "student saved");
                self.close_modal();
                self.refresh();
            }
            Err(e) => {
                error!(error = %e, "error saving student");
                self.view.alert(failure);
            }
        }
    }

    /// Deletes the rendered row with `id` after the user confirms. Returns
    /// false without prompting when no such row is on screen.
    pub fn delete_row(&mut self, id: &StudentId) -> bool {
        if self.row(id).is_none() {
            return false;
        }
        if !self.view.confirm(CONFIRM_DELETE) {
            return true;
        }

        match self.api.delete_student(id) {
            Ok(()) => {
                info!(%id, "student deleted");
                self.refresh();
            }
            Err(e) => {
                error!(error = %e, %id, "error deleting student");
                self.view.alert(DELETE_FAILED);
            }
        }
        true
    }

    fn set_state(&mut self, state: UiState) {
        self.state = state;
        self.view.show_state(state);
    }
}
