//! Server-rendered landing page listing the catalog.

use std::fmt::Write;

use crate::Book;

pub(crate) fn render(books: &[Book]) -> String {
    let mut rows = String::new();
    for book in books {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&book.title),
            escape(&book.author.name),
            escape(&book.isbn),
        );
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Books</title></head>\n<body>\n\
         <table>\n<thead><tr><th>Title</th><th>Author</th><th>ISBN</th></tr></thead>\n\
         <tbody id=\"books-container\">{rows}</tbody>\n</table>\n</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
