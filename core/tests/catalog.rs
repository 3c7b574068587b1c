//! Behaviour of `CatalogClient` against a scripted transport and a view that
//! records what it was asked to show.

use std::cell::RefCell;
use std::collections::VecDeque;

use catalog_core::{
    ApiError, BookClient, BookForm, BookId, BookRow, CatalogClient, CatalogView, DeleteOutcome,
    FormMode, HttpMethod, HttpRequest, HttpResponse, Transport, DELETE_CONFIRMATION,
    DELETE_FAILED,
};

const BASE_URL: &str = "http://localhost:8080";

/// Replays queued responses in order and records every request.
#[derive(Default)]
struct ScriptedTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl ScriptedTransport {
    fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
        self
    }

    fn fail(self, reason: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_string())));
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
    }
}

struct RecordingView {
    rows: Vec<BookRow>,
    renders: usize,
    forms: Vec<BookForm>,
    prompts: Vec<String>,
    alerts: Vec<String>,
    answer: bool,
}

impl RecordingView {
    fn answering(answer: bool) -> Self {
        Self {
            rows: Vec::new(),
            renders: 0,
            forms: Vec::new(),
            prompts: Vec::new(),
            alerts: Vec::new(),
            answer,
        }
    }
}

impl CatalogView for RecordingView {
    fn replace_rows(&mut self, rows: Vec<BookRow>) {
        self.rows = rows;
        self.renders += 1;
    }

    fn show_form(&mut self, form: &BookForm) {
        self.forms.push(form.clone());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

type Client = CatalogClient<ScriptedTransport, RecordingView>;

fn catalog(transport: ScriptedTransport) -> Client {
    catalog_with(transport, RecordingView::answering(true))
}

fn catalog_with(transport: ScriptedTransport, view: RecordingView) -> Client {
    CatalogClient::new(BookClient::new(BASE_URL), transport, view)
}

const TWO_BOOKS: &str = r#"[
    {"id":1,"title":"Tobacco","author":{"name":"Dimitar Dimov"},"isbn":"isbn-1"},
    {"id":2,"title":"Under the Yoke","author":{"name":"Ivan Vazov"},"isbn":"isbn-2"}
]"#;

const BOOK_2: &str =
    r#"{"id":2,"title":"Under the Yoke","author":{"name":"Ivan Vazov"},"isbn":"isbn-2"}"#;

fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

fn fill(client: &mut Client, title: &str, author: &str, isbn: &str) {
    let form = client.form_mut();
    form.title = title.to_string();
    form.author = author.to_string();
    form.isbn = isbn.to_string();
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_renders_one_row_per_book() {
    let mut client = catalog(ScriptedTransport::default().reply(200, TWO_BOOKS));

    assert_eq!(client.list().unwrap(), 2);

    let rows = &client.view().rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Tobacco");
    assert_eq!(rows[0].author, "Dimitar Dimov");
    assert_eq!(rows[0].isbn, "isbn-1");
    assert_eq!(rows[1].id, Some(BookId::from(2)));
    assert_eq!(rows[1].author, "Ivan Vazov");

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].path, "http://localhost:8080/api/books");
}

#[test]
fn list_replaces_rather_than_appends() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(200, TWO_BOOKS)
            .reply(200, &format!("[{BOOK_2}]")),
    );

    client.list().unwrap();
    client.list().unwrap();

    assert_eq!(client.view().rows.len(), 1);
    assert_eq!(client.view().rows[0].title, "Under the Yoke");
}

#[test]
fn failed_list_keeps_previous_rows() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(200, TWO_BOOKS)
            .fail("connection refused")
            .reply(500, "<html>oops</html>"),
    );

    client.list().unwrap();
    assert!(matches!(client.list(), Err(ApiError::Transport(_))));
    assert!(matches!(
        client.list(),
        Err(ApiError::Deserialization { status: 500, .. })
    ));

    assert_eq!(client.view().renders, 1);
    assert_eq!(client.view().rows.len(), 2);
    assert!(client.view().alerts.is_empty());
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

#[test]
fn save_while_creating_posts_without_id_then_reloads_and_resets() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(
                201,
                r#"{"id":3,"title":"Wild Tales","author":{"name":"Nikolai Haitov"},"isbn":"isbn-3"}"#,
            )
            .reply(200, TWO_BOOKS),
    );
    fill(&mut client, "Wild Tales", "Nikolai Haitov", "isbn-3");

    let saved = client.save().unwrap();
    assert_eq!(saved.id, Some(BookId::from(3)));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "http://localhost:8080/api/books");
    let body = body_json(&requests[0]);
    assert!(body.get("id").is_none());
    assert_eq!(body["title"], "Wild Tales");
    assert_eq!(body["author"]["name"], "Nikolai Haitov");
    assert_eq!(body["isbn"], "isbn-3");

    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(requests[1].path, "http://localhost:8080/api/books");
    assert_eq!(client.view().renders, 1);

    assert_eq!(client.form(), &BookForm::new());
    assert_eq!(client.form().id_field(), "");
}

#[test]
fn save_while_editing_puts_to_the_loaded_id() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(200, BOOK_2)
            .reply(
                200,
                r#"{"id":2,"title":"Under the Yoke","author":{"name":"Ivan Vazov"},"isbn":"isbn-2b"}"#,
            )
            .reply(200, TWO_BOOKS),
    );

    client.edit(BookId::from(2)).unwrap();
    client.form_mut().isbn = "isbn-2b".to_string();
    client.save().unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, HttpMethod::Put);
    assert_eq!(requests[1].path, "http://localhost:8080/api/books/2");
    let body = body_json(&requests[1]);
    assert_eq!(body["isbn"], "isbn-2b");
    assert_eq!(body["title"], "Under the Yoke");

    assert_eq!(requests[2].method, HttpMethod::Get);
    assert_eq!(client.form().mode(), FormMode::Creating);
}

#[test]
fn failed_save_keeps_form_and_skips_reload() {
    let mut client = catalog(ScriptedTransport::default().fail("connection reset"));
    fill(&mut client, "Wild Tales", "Nikolai Haitov", "isbn-3");
    let before = client.form().clone();

    assert!(matches!(client.save(), Err(ApiError::Transport(_))));

    assert_eq!(client.form(), &before);
    assert_eq!(client.transport().requests().len(), 1);
    assert_eq!(client.view().renders, 0);
    assert!(client.view().forms.is_empty());
    assert!(client.view().alerts.is_empty());
}

#[test]
fn save_with_undecodable_reply_keeps_form() {
    let mut client = catalog(ScriptedTransport::default().reply(400, ""));
    client.form_mut().title = "Untitled".to_string();

    assert!(matches!(
        client.save(),
        Err(ApiError::Deserialization { status: 400, .. })
    ));
    assert_eq!(client.form().title, "Untitled");
    assert_eq!(client.transport().requests().len(), 1);
}

#[test]
fn failed_reload_after_save_still_resets_form() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(
                201,
                r#"{"id":3,"title":"Wild Tales","author":{"name":"Nikolai Haitov"},"isbn":"isbn-3"}"#,
            )
            .fail("connection reset"),
    );
    fill(&mut client, "Wild Tales", "Nikolai Haitov", "isbn-3");

    let saved = client.save().unwrap();
    assert_eq!(saved.id, Some(BookId::from(3)));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert_eq!(client.view().renders, 0);
    assert_eq!(client.form(), &BookForm::new());
    assert_eq!(client.view().forms.last(), Some(&BookForm::new()));
    assert!(client.view().alerts.is_empty());
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[test]
fn edit_populates_form_exactly_as_returned() {
    let mut client = catalog(ScriptedTransport::default().reply(200, BOOK_2));

    client.edit(BookId::from(2)).unwrap();

    let request = &client.transport().requests()[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.path, "http://localhost:8080/api/books/2");

    let form = client.form();
    assert_eq!(form.mode(), FormMode::Editing(BookId::from(2)));
    assert_eq!(form.id_field(), "2");
    assert_eq!(form.title, "Under the Yoke");
    assert_eq!(form.author, "Ivan Vazov");
    assert_eq!(form.isbn, "isbn-2");
    assert_eq!(client.view().forms.last(), Some(form));
}

#[test]
fn failed_edit_leaves_form_unchanged() {
    let mut client = catalog(
        ScriptedTransport::default()
            .fail("timed out")
            .reply(404, ""),
    );
    fill(&mut client, "Draft", "Someone", "isbn-x");
    let before = client.form().clone();

    assert!(client.edit(BookId::from(9)).is_err());
    assert!(client.edit(BookId::from(9)).is_err());

    assert_eq!(client.form(), &before);
    assert_eq!(client.form().mode(), FormMode::Creating);
    assert!(client.view().forms.is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn declined_delete_sends_nothing() {
    let mut client = catalog_with(ScriptedTransport::default(), RecordingView::answering(false));

    let outcome = client.delete(BookId::from(1)).unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(client.view().prompts, vec![DELETE_CONFIRMATION.to_string()]);
    assert!(client.transport().requests().is_empty());
}

#[test]
fn confirmed_delete_reloads_without_alert() {
    let mut client = catalog(
        ScriptedTransport::default()
            .reply(204, "")
            .reply(200, &format!("[{BOOK_2}]")),
    );

    let outcome = client.delete(BookId::from(1)).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    let requests = client.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[0].path, "http://localhost:8080/api/books/1");
    assert_eq!(requests[1].method, HttpMethod::Get);
    assert!(client.view().alerts.is_empty());
    assert_eq!(client.view().rows.len(), 1);
}

#[test]
fn rejected_delete_alerts_and_does_not_reload() {
    let mut client = catalog(ScriptedTransport::default().reply(500, "constraint violation"));

    let outcome = client.delete(BookId::from(1)).unwrap();

    assert_eq!(outcome, DeleteOutcome::Rejected { status: 500 });
    assert_eq!(client.view().alerts, vec![DELETE_FAILED.to_string()]);
    assert_eq!(client.transport().requests().len(), 1);
    assert_eq!(client.view().renders, 0);
}

#[test]
fn delete_transport_failure_is_logged_only() {
    let mut client = catalog(ScriptedTransport::default().fail("connection refused"));

    assert!(matches!(
        client.delete(BookId::from(1)),
        Err(ApiError::Transport(_))
    ));
    assert!(client.view().alerts.is_empty());
    assert_eq!(client.view().renders, 0);
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn reset_returns_form_to_creating() {
    let mut client = catalog(ScriptedTransport::default().reply(200, BOOK_2));
    client.edit(BookId::from(2)).unwrap();

    client.reset();

    assert_eq!(client.form(), &BookForm::new());
    assert_eq!(client.view().forms.last(), Some(&BookForm::new()));
    assert_eq!(client.transport().requests().len(), 1);
}
