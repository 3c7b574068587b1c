//! The UI surface a [`CatalogClient`](crate::CatalogClient) drives.

use crate::form::BookForm;
use crate::types::BookRow;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this book?";
pub const DELETE_FAILED: &str = "Error deleting book";

pub trait CatalogView {
    /// Replace every rendered row with `rows`, in order.
    fn replace_rows(&mut self, rows: Vec<BookRow>);

    /// Reflect the current form contents after an edit load or a reset.
    fn show_form(&mut self, form: &BookForm);

    /// Blocking yes/no prompt.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Blocking user-visible error message.
    fn alert(&mut self, message: &str);
}
