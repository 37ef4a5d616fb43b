//! Client core for the student records service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and drives a list view plus
//! an add/edit modal through the `View` trait. The host supplies a
//! `Transport` to execute requests and a `View` to draw.
//!
//! # Design
//! - `StudentClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`; `StudentApi`
//!   glues them to a transport.
//! - `Controller` owns the only mutable UI state (`UiState` and `Modal`) and
//!   re-lists from the server after every successful mutation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

#[cfg(test)]
mod test_support;

pub use api::StudentApi;
pub use client::StudentClient;
pub use controller::Controller;
pub use error::{ApiError, FormError, TransportError};
pub use form::{ClickTarget, Draft, Field, Modal, ModalMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{NewStudent, Student, StudentId};
pub use view::{UiState, View};
