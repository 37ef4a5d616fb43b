//! Terminal front-end for the student records service.
//!
//! Executes the core's requests with ureq and renders the controller's view
//! as a plain-text table and form on stdout.

pub mod app;
pub mod command;
pub mod config;
pub mod terminal;
pub mod transport;

pub use config::Config;
pub use terminal::TerminalView;
pub use transport::UreqTransport;
