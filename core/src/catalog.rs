//! Form-and-table client that keeps a view in step with the collection.
//!
//! # Design
//! `CatalogClient` owns everything the page used to reach through globals:
//! the request builder, a transport, the view, and the form. It is built once
//! when the host mounts the view and lives as long as the host does.
//!
//! Failure handling follows two rules. Transport and decode failures are
//! logged with `tracing::error!` and leave the view and form untouched. A
//! non-2xx answer to a delete is the only failure shown to the user, through
//! [`CatalogView::alert`]. Every operation still returns its `Result` so the
//! host can branch on it (the CLI turns failures into its exit code).

use tracing::{debug, error, info, warn};

use crate::client::BookClient;
use crate::error::ApiError;
use crate::form::{BookForm, FormMode};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Book, BookId, BookRow};
use crate::view::{CatalogView, DELETE_CONFIRMATION, DELETE_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Deleted,
    /// The server answered with a non-success status.
    Rejected { status: u16 },
}

pub struct CatalogClient<T, V> {
    api: BookClient,
    transport: T,
    view: V,
    form: BookForm,
}

impl<T: Transport, V: CatalogView> CatalogClient<T, V> {
    pub fn new(api: BookClient, transport: T, view: V) -> Self {
        Self {
            api,
            transport,
            view,
            form: BookForm::new(),
        }
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the whole collection and replace the view's rows with it.
    ///
    /// Rows are only handed to the view once the response has decoded, so a
    /// failed reload leaves the previous table in place.
    pub fn list(&mut self) -> Result<usize, ApiError> {
        let result = self
            .send(self.api.build_list_books())
            .and_then(|response| self.api.parse_list_books(response));

        match result {
            Ok(books) => {
                let rows: Vec<BookRow> = books.iter().map(BookRow::from).collect();
                let count = rows.len();
                self.view.replace_rows(rows);
                debug!(count, "rendered book list");
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "failed to load books");
                Err(err)
            }
        }
    }

    /// Create or update from the form, depending on its mode.
    ///
    /// On success the list is reloaded and the form reset. On failure neither
    /// happens and the form keeps what the user typed.
    pub fn save(&mut self) -> Result<Book, ApiError> {
        let book = self.form.to_book();
        let mode = self.form.mode();

        let result = match mode {
            FormMode::Creating => self
                .api
                .build_create_book(&book)
                .and_then(|request| self.send(request))
                .and_then(|response| self.api.parse_create_book(response)),
            FormMode::Editing(id) => self
                .api
                .build_update_book(id, &book)
                .and_then(|request| self.send(request))
                .and_then(|response| self.api.parse_update_book(response)),
        };

        match result {
            Ok(saved) => {
                info!(id = ?saved.id, mode = ?mode, "saved book");
                // A failed reload is logged by `list` and does not undo the save.
                let _ = self.list();
                self.reset();
                Ok(saved)
            }
            Err(err) => {
                error!(error = %err, mode = ?mode, "failed to save book");
                Err(err)
            }
        }
    }

    /// Load one book into the form so the next save updates it.
    pub fn edit(&mut self, id: BookId) -> Result<(), ApiError> {
        let result = self
            .send(self.api.build_get_book(id))
            .and_then(|response| self.api.parse_get_book(response));

        match result {
            Ok(book) => {
                self.form.load(book);
                self.view.show_form(&self.form);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, %id, "failed to load book for editing");
                Err(err)
            }
        }
    }

    /// Ask for confirmation, then delete and reload.
    pub fn delete(&mut self, id: BookId) -> Result<DeleteOutcome, ApiError> {
        if !self.view.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let result = self
            .send(self.api.build_delete_book(id))
            .and_then(|response| self.api.parse_delete_book(response));

        match result {
            Ok(()) => {
                info!(%id, "deleted book");
                let _ = self.list();
                Ok(DeleteOutcome::Deleted)
            }
            Err(ApiError::Rejected { status, .. }) => {
                warn!(%id, status, "server refused delete");
                self.view.alert(DELETE_FAILED);
                Ok(DeleteOutcome::Rejected { status })
            }
            Err(err) => {
                error!(error = %err, %id, "failed to delete book");
                Err(err)
            }
        }
    }

    /// Clear the form back to creating a new book.
    pub fn reset(&mut self) {
        self.form.reset();
        self.view.show_form(&self.form);
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
