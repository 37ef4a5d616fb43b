//! Add/edit modal state and the draft it edits.
//!
//! The draft holds raw text exactly as typed. It is only turned into a
//! `NewStudent` on submit, and an unparseable age is rejected there instead
//! of being sent to the server.

use crate::error::FormError;
use crate::types::{NewStudent, Student, StudentId};

/// Editable form fields. The hidden id is not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Age,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
        }
    }
}

/// In-progress, unsaved field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Hidden identifier; empty means the draft creates a new student.
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: String,
}

impl Draft {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: student
                .id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age.map(|age| age.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
        };
        *slot = value.into();
    }

    /// The id to update, or `None` when this draft creates a record.
    pub fn target(&self) -> Option<StudentId> {
        if self.id.is_empty() {
            None
        } else {
            Some(StudentId::new(self.id.clone()))
        }
    }

    /// Builds the request body. Name and email are passed through untouched.
    pub fn to_payload(&self) -> Result<NewStudent, FormError> {
        let age = self.age.trim();
        if age.is_empty() {
            return Err(FormError::MissingAge);
        }
        let age = age
            .parse::<i64>()
            .map_err(|_| FormError::InvalidAge(self.age.clone()))?;
        Ok(NewStudent {
            name: self.name.clone(),
            email: self.email.clone(),
            age,
        })
    }
}

/// Which way the modal is open, if at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Create,
    Edit(Student),
}

/// Where a click outside the table landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed background around the form.
    Overlay,
    /// The form surface itself.
    Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    mode: ModalMode,
    draft: Draft,
}

impl Modal {
    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, ModalMode::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Edit(_) => "Edit Student",
            _ => "Add Student",
        }
    }

    pub fn open_create(&mut self) {
        self.mode = ModalMode::Create;
        self.draft = Draft::default();
    }

    pub fn open_edit(&mut self, student: Student) {
        self.draft = Draft::from_student(&student);
        self.mode = ModalMode::Edit(student);
    }

    /// Hides the modal. The draft survives until the next open.
    pub fn close(&mut self) {
        self.mode = ModalMode::Closed;
    }
}
