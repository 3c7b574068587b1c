//! The single edit form shared by create and update.
//!
//! # Design
//! Whether a save creates or updates is carried by [`FormMode`] instead of
//! being inferred from an empty hidden field. The mode is private: it moves
//! to `Editing` only when a fetched book is loaded, and back to `Creating`
//! only through [`BookForm::reset`]. The text fields are public so the host
//! can bind them to its inputs.

use crate::types::{Author, Book, BookId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(BookId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    mode: FormMode,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Text of the hidden identifier field: empty while creating.
    pub fn id_field(&self) -> String {
        match self.mode {
            FormMode::Creating => String::new(),
            FormMode::Editing(id) => id.to_string(),
        }
    }

    /// Snapshot the fields as a book payload.
    pub fn to_book(&self) -> Book {
        Book {
            id: match self.mode {
                FormMode::Creating => None,
                FormMode::Editing(id) => Some(id),
            },
            title: self.title.clone(),
            author: Author {
                name: self.author.clone(),
            },
            isbn: self.isbn.clone(),
        }
    }

    /// Populate every field from a book returned by the server. A book
    /// without an id leaves the form in `Creating`.
    pub(crate) fn load(&mut self, book: Book) {
        self.mode = match book.id {
            Some(id) => FormMode::Editing(id),
            None => FormMode::Creating,
        };
        self.title = book.title;
        self.author = book.author.name;
        self.isbn = book.isbn;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
