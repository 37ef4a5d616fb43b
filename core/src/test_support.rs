//! Scripted transport and recording view shared by the unit tests.

use std::collections::VecDeque;

use crate::error::TransportError;
use crate::form::Draft;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::Student;
use crate::view::{UiState, View};

/// Answers requests from a queue and remembers what was sent.
#[derive(Debug, Default)]
pub struct Scripted {
    pub sent: Vec<HttpRequest>,
    replies: VecDeque<Result<HttpResponse, TransportError>>,
}

impl Scripted {
    pub fn reply(mut self, status: u16, body: &str) -> Self {
        self.push_reply(status, body);
        self
    }

    pub fn fail(mut self) -> Self {
        self.push_failure();
        self
    }

    pub fn push_reply(&mut self, status: u16, body: &str) {
        self.replies.push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub fn push_failure(&mut self) {
        self.replies
            .push_back(Err(TransportError::new("connection refused")));
    }

    pub fn count(&self, method: HttpMethod) -> usize {
        self.sent.iter().filter(|r| r.method == method).count()
    }
}

impl Transport for Scripted {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.push(request);
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply")))
    }
}

/// Records everything the controller asks it to show.
#[derive(Debug, Default)]
pub struct Recorder {
    pub states: Vec<UiState>,
    pub loading_visible: bool,
    pub rows: Vec<Student>,
    pub renders: usize,
    pub modal: Option<(String, Draft)>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
    pub answer: bool,
}

impl View for Recorder {
    fn show_state(&mut self, state: UiState) {
        self.loading_visible = state == UiState::Loading;
        self.states.push(state);
    }

    fn render_rows(&mut self, rows: &[Student]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }

    fn show_modal(&mut self, title: &str, draft: &Draft) {
        self.modal = Some((title.to_string(), draft.clone()));
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answer
    }
}
