//! Book catalog client core.
//!
//! # Overview
//! Lists, creates, edits, and deletes books held by a remote collection
//! service, mirroring the collection into a table view and driving a single
//! create/update form.
//!
//! # Design
//! - `BookClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`, and no I/O happens in between.
//! - `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `CatalogView` is the UI surface (rows, form, confirm, alert).
//! - `CatalogClient` wires the three together with a `BookForm` whose
//!   create/update mode is explicit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod settings;
pub mod transport;
pub mod types;
pub mod view;

pub use catalog::{CatalogClient, DeleteOutcome};
pub use client::BookClient;
pub use error::ApiError;
pub use form::{BookForm, FormMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use settings::ClientSettings;
pub use transport::{Transport, UreqTransport};
pub use types::{Author, Book, BookId, BookRow};
pub use view::{CatalogView, DELETE_CONFIRMATION, DELETE_FAILED};
