/// UI state of the book manager
use bookshelf_core::{Book, BookForm, Message};

/// Everything the view renders. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Last fetched list, in server order
    pub books: Vec<Book>,
    /// Add/edit buffer
    pub book: BookForm,
    /// Raw text of the lookup input
    pub id_to_fetch: String,
    /// Result of the last successful lookup
    pub fetched_book: Option<Book>,
    /// Outcome of the last action
    pub message: Option<Message>,
    /// Whether the primary action replaces an existing record
    pub edit_mode: bool,
}

impl ViewState {
    /// Heading of the form section
    pub fn form_title(&self) -> &'static str {
        if self.edit_mode {
            "Edit Book"
        } else {
            "Add Book"
        }
    }
}
