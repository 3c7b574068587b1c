//! Domain DTOs for the book catalog API.
//!
//! # Design
//! These types mirror the collection service's wire shape but are defined
//! independently of the mock-server crate. Integration tests catch any schema
//! drift between the two crates.
//!
//! Authors are embedded in each book as `{ "name": ... }`; there is no
//! separate author resource on the client side.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned book identifier.
///
/// The client never mints these: a `BookId` only ever comes from a response
/// body or from user input naming an existing book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}

/// A book as exchanged with the collection service.
///
/// `id` is absent on a book that has not been created yet and is omitted
/// from the JSON in that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    pub title: String,
    pub author: Author,
    pub isbn: String,
}

/// Display projection of a [`Book`]: one table row with its Edit/Delete
/// controls keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.name.clone(),
            isbn: book.isbn.clone(),
        }
    }
}
