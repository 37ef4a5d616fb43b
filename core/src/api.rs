//! The four student operations, executed through a host-supplied transport.

use tracing::{debug, warn};

use crate::client::StudentClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{NewStudent, Student, StudentId};

/// Pairs a `StudentClient` with a `Transport` so each operation is one call.
#[derive(Debug)]
pub struct StudentApi<T> {
    client: StudentClient,
    transport: T,
}

impl<T: Transport> StudentApi<T> {
    pub fn new(client: StudentClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_students(&mut self) -> Result<Vec<Student>, ApiError> {
        let req = self.client.build_list_students();
        let response = self.send(req)?;
        let students = self.client.parse_list_students(response);
        log_outcome("list", &students);
        students
    }

    pub fn create_student(&mut self, input: &NewStudent) -> Result<(), ApiError> {
        let req = self.client.build_create_student(input)?;
        let result = self.send(req).and_then(|r| self.client.parse_create_student(r));
        log_outcome("create", &result);
        result
    }

    pub fn update_student(&mut self, id: &StudentId, input: &NewStudent) -> Result<(), ApiError> {
        let req = self.client.build_update_student(id, input)?;
        let result = self.send(req).and_then(|r| self.client.parse_update_student(r));
        log_outcome("update", &result);
        result
    }

    pub fn delete_student(&mut self, id: &StudentId) -> Result<(), ApiError> {
        let req = self.client.build_delete_student(id);
        let result = self.send(req).and_then(|r| self.client.parse_delete_student(r));
        log_outcome("delete", &result);
        result
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");
        let response = self.transport.execute(request).map_err(|e| {
            warn!(error = %e, "request did not complete");
            ApiError::from(e)
        })?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn log_outcome<V>(operation: &str, result: &Result<V, ApiError>) {
    if let Err(e) = result {
        warn!(operation, error = %e, "student operation failed");
    }
}
