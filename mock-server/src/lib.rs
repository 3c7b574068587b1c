use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod index;
pub mod seed;
pub mod settings;

pub use settings::ServerSettings;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Author,
    pub isbn: String,
}

/// Create/update payload. An `id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: Author,
    pub isbn: String,
}

#[derive(Debug)]
struct BookRecord {
    title: String,
    isbn: String,
    author_id: i64,
}

/// In-memory book store. Authors are kept once per distinct name and
/// looked up by name whenever a book is written.
#[derive(Debug, Default)]
pub struct Catalog {
    next_book_id: i64,
    next_author_id: i64,
    authors: BTreeMap<i64, String>,
    books: BTreeMap<i64, BookRecord>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.authors.is_empty()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn list(&self) -> Vec<Book> {
        self.books
            .iter()
            .map(|(id, record)| self.to_book(*id, record))
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<Book> {
        self.books.get(&id).map(|record| self.to_book(id, record))
    }

    pub fn create(&mut self, input: BookInput) -> Book {
        let author_id = self.author_id(&input.author.name);
        self.next_book_id += 1;
        let id = self.next_book_id;
        self.books.insert(
            id,
            BookRecord {
                title: input.title,
                isbn: input.isbn,
                author_id,
            },
        );
        self.to_book(id, &self.books[&id])
    }

    pub fn update(&mut self, id: i64, input: BookInput) -> Option<Book> {
        if !self.books.contains_key(&id) {
            return None;
        }
        let author_id = self.author_id(&input.author.name);
        let record = self.books.get_mut(&id)?;
        record.title = input.title;
        record.isbn = input.isbn;
        record.author_id = author_id;
        self.get(id)
    }

    /// Returns whether a book was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        self.books.remove(&id).is_some()
    }

    fn author_id(&mut self, name: &str) -> i64 {
        if let Some((id, _)) = self.authors.iter().find(|(_, n)| n.as_str() == name) {
            return *id;
        }
        self.next_author_id += 1;
        self.authors.insert(self.next_author_id, name.to_string());
        self.next_author_id
    }

    fn to_book(&self, id: i64, record: &BookRecord) -> Book {
        Book {
            id,
            title: record.title.clone(),
            author: Author {
                name: self.authors.get(&record.author_id).cloned().unwrap_or_default(),
            },
            isbn: record.isbn.clone(),
        }
    }
}

pub type Db = Arc<RwLock<Catalog>>;

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Router over an empty catalog.
pub fn app() -> Router {
    router(Db::default())
}

/// Router over a catalog pre-filled with the sample books.
pub fn seeded_app() -> Router {
    let mut catalog = Catalog::default();
    seed::seed(&mut catalog);
    router(Arc::new(RwLock::new(catalog)))
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn home(State(db): State<Db>) -> Html<String> {
    let books = db.read().await.list();
    Html(index::render(&books))
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    Json(db.read().await.list())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<BookInput>,
) -> (StatusCode, Json<Book>) {
    let book = db.write().await.create(input);
    tracing::debug!(id = book.id, "created book");
    (StatusCode::CREATED, Json(book))
}

async fn get_book(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Book>, StatusCode> {
    db.read().await.get(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, StatusCode> {
    db.write()
        .await
        .update(id, input)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Deleting an unknown id still answers 204.
async fn delete_book(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    if !db.write().await.delete(id) {
        tracing::debug!(id, "delete of unknown book");
    }
    StatusCode::NO_CONTENT
}
