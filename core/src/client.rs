//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//!
//! List, get, create, and update do not branch on status: whatever body came
//! back is decoded as data, and a body that is not a book (an empty 404, an
//! error page) fails decoding. Delete has no body to decode, so it is the one
//! parser that checks for a 2xx status.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookId};

const BOOKS_PATH: &str = "/api/books";

/// Synchronous, stateless client for the book collection API.
#[derive(Debug, Clone)]
pub struct BookClient {
    base_url: String,
}

impl BookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_books(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_book(&self, id: BookId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.book_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST the book to the collection. Any `id` on `book` is dropped so the
    /// server always assigns one.
    pub fn build_create_book(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        let payload = Book {
            id: None,
            ..book.clone()
        };
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(serde_json::to_string(&payload)?),
        })
    }

    pub fn build_update_book(&self, id: BookId, book: &Book) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.book_url(id),
            headers: json_headers(),
            body: Some(serde_json::to_string(book)?),
        })
    }

    pub fn build_delete_book(&self, id: BookId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.book_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        decode(&response)
    }

    pub fn parse_get_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        decode(&response)
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        decode(&response)
    }

    pub fn parse_update_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        decode(&response)
    }

    pub fn parse_delete_book(&self, response: HttpResponse) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        Err(ApiError::Rejected {
            status: response.status,
            body: response.body,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{BOOKS_PATH}", self.base_url)
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}{BOOKS_PATH}/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|source| ApiError::Deserialization {
        status: response.status,
        source,
    })
}
