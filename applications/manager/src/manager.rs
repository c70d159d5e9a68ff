//! Book manager - the view model behind the UI
//!
//! Owns the UI state and is the only place that talks to the `BookService`.
//! Handlers never fail: every backend error is logged and turned into the
//! banner message.

use crate::state::ViewState;
use bookshelf_core::{Book, BookForm, BookId, BookService, BookshelfError, FormField, Message};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// User-visible banner texts
pub mod messages {
    pub const BOOK_ADDED: &str = "Book added successfully.";
    pub const BOOK_UPDATED: &str = "Book updated successfully.";
    pub const ADD_FAILED: &str = "Error adding book.";
    pub const UPDATE_FAILED: &str = "Error updating book.";
    pub const DELETE_FAILED: &str = "Error deleting book.";
    pub const NOT_FOUND: &str = "Book not found.";
    pub const FETCH_FAILED: &str = "Failed to fetch books.";

    pub fn missing_field(key: &str) -> String {
        format!("Please fill out the {} field.", key)
    }

    pub fn invalid_number(key: &str) -> String {
        format!("Please enter a valid number for the {} field.", key)
    }

    pub fn editing(id: i64) -> String {
        format!("Editing book with ID {}", id)
    }
}

struct Shared {
    view: ViewState,
    /// Ticket of the newest list refresh whose outcome has been applied
    applied_refresh: u64,
}

/// View model for the single book management screen.
///
/// Handlers take `&self`, so several may be in flight at once. State is
/// never locked across a request. List refreshes are sequenced: a refresh
/// that completes after a newer one has been applied is discarded.
pub struct BookManager {
    service: Arc<dyn BookService>,
    shared: RwLock<Shared>,
    /// Last refresh ticket handed out
    refresh_seq: AtomicU64,
}

impl BookManager {
    /// Create a manager in its initial state: add mode, empty buffer, no books.
    pub fn new(service: Arc<dyn BookService>) -> Self {
        Self {
            service,
            shared: RwLock::new(Shared {
                view: ViewState::default(),
                applied_refresh: 0,
            }),
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Copy of the current UI state, for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.shared.read().await.view.clone()
    }

    /// Initial load when the screen is shown.
    pub async fn mount(&self) {
        self.fetch_all_books().await;
    }

    /// Replace the book list with the backend's.
    ///
    /// On failure the previous list stays and the banner reports it.
    pub async fn fetch_all_books(&self) {
        let ticket = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, "Refreshing book list");

        let result = self.service.list_books().await;

        let mut shared = self.shared.write().await;
        if ticket < shared.applied_refresh {
            debug!(
                ticket,
                applied = shared.applied_refresh,
                "Discarding superseded list refresh"
            );
            return;
        }
        shared.applied_refresh = ticket;

        match result {
            Ok(books) => {
                debug!(ticket, count = books.len(), "Book list refreshed");
                shared.view.books = books;
            }
            Err(e) => {
                warn!(ticket, error = %e, status = ?e.status(), "Failed to fetch books");
                shared.view.message = Some(Message::failure(messages::FETCH_FAILED));
            }
        }
    }

    /// Update one field of the buffer.
    pub async fn handle_change(&self, field: FormField, value: impl Into<String>) {
        self.shared.write().await.view.book.set(field, value);
    }

    /// Update the lookup input.
    pub async fn set_id_to_fetch(&self, value: impl Into<String>) {
        self.shared.write().await.view.id_to_fetch = value.into();
    }

    /// Check that every field of the buffer is filled in.
    ///
    /// On failure the banner names the first blank field in template order.
    pub async fn validate_form(&self) -> bool {
        let mut shared = self.shared.write().await;
        check_filled(&mut shared.view)
    }

    /// Validate the buffer and turn it into a record ready to send.
    ///
    /// Both steps run under one write guard so the record sent is the one
    /// that passed validation.
    async fn validated_book(&self) -> Option<Book> {
        let mut shared = self.shared.write().await;
        if !check_filled(&mut shared.view) {
            return None;
        }

        match shared.view.book.to_book() {
            Ok(book) => Some(book),
            Err(BookshelfError::InvalidField { field, value }) => {
                debug!(field = %field, value = %value, "Rejected non-numeric input");
                shared.view.message = Some(Message::failure(messages::invalid_number(&field)));
                None
            }
            Err(e) => {
                shared.view.message = Some(Message::failure(e.to_string()));
                None
            }
        }
    }

    /// Create a book from the buffer.
    pub async fn add_book(&self) {
        let Some(book) = self.validated_book().await else {
            return;
        };

        match self.service.add_book(&book).await {
            Ok(()) => {
                info!(book_id = book.id, "Book added");
                self.set_message(Message::success(messages::BOOK_ADDED)).await;
                self.reset_form().await;
                self.fetch_all_books().await;
            }
            Err(e) => {
                warn!(book_id = book.id, error = %e, status = ?e.status(), "Failed to add book");
                self.set_message(Message::failure(messages::ADD_FAILED)).await;
            }
        }
    }

    /// Replace the record identified by the buffer's id with the buffer.
    pub async fn update_book(&self) {
        let Some(book) = self.validated_book().await else {
            return;
        };

        match self.service.update_book(&book).await {
            Ok(()) => {
                info!(book_id = book.id, "Book updated");
                self.set_message(Message::success(messages::BOOK_UPDATED)).await;
                self.reset_form().await;
                self.fetch_all_books().await;
            }
            Err(e) => {
                warn!(book_id = book.id, error = %e, status = ?e.status(), "Failed to update book");
                self.set_message(Message::failure(messages::UPDATE_FAILED)).await;
            }
        }
    }

    /// Primary form action: add in add mode, update in edit mode.
    pub async fn submit(&self) {
        let edit_mode = self.shared.read().await.view.edit_mode;
        if edit_mode {
            self.update_book().await;
        } else {
            self.add_book().await;
        }
    }

    /// Delete a book. The backend's reply becomes the banner text.
    pub async fn delete_book(&self, id: BookId) {
        match self.service.delete_book(id).await {
            Ok(text) => {
                info!(book_id = id, "Book deleted");
                // An empty reply clears the banner
                let message = (!text.is_empty()).then(|| Message::success(text));
                self.shared.write().await.view.message = message;
                self.fetch_all_books().await;
            }
            Err(e) => {
                warn!(book_id = id, error = %e, status = ?e.status(), "Failed to delete book");
                self.set_message(Message::failure(messages::DELETE_FAILED)).await;
            }
        }
    }

    /// Look up the book named by the lookup input.
    pub async fn get_book_by_id(&self) {
        let id = self.shared.read().await.view.id_to_fetch.trim().to_string();

        let result = self.service.get_book(&id).await;

        let mut shared = self.shared.write().await;
        match result {
            Ok(book) => {
                debug!(book_id = book.id, "Book found");
                shared.view.fetched_book = Some(book);
                shared.view.message = None;
            }
            Err(e) => {
                warn!(book_id = %id, error = %e, status = ?e.status(), "Book lookup failed");
                shared.view.fetched_book = None;
                shared.view.message = Some(Message::failure(messages::NOT_FOUND));
            }
        }
    }

    /// Load a listed record into the buffer and switch to edit mode.
    ///
    /// Uses the values as listed; nothing is re-fetched.
    pub async fn handle_edit(&self, record: &Book) {
        let mut shared = self.shared.write().await;
        shared.view.book = BookForm::from_book(record);
        shared.view.edit_mode = true;
        shared.view.message = Some(Message::success(messages::editing(record.id)));
    }

    /// Clear the buffer and go back to add mode.
    pub async fn reset_form(&self) {
        let mut shared = self.shared.write().await;
        shared.view.book = BookForm::empty();
        shared.view.edit_mode = false;
    }

    /// A book from the current list, as shown on screen.
    pub async fn find_book(&self, id: BookId) -> Option<Book> {
        self.shared
            .read()
            .await
            .view
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    async fn set_message(&self, message: Message) {
        self.shared.write().await.view.message = Some(message);
    }
}

/// Presence gate shared by `validate_form` and the submit path.
fn check_filled(view: &mut ViewState) -> bool {
    match view.book.first_missing() {
        Some(field) => {
            view.message = Some(Message::failure(messages::missing_field(field.key())));
            false
        }
        None => true,
    }
}
