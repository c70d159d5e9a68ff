/// Core traits for Bookshelf
use crate::error::Result;
use crate::types::{Book, BookId};
use async_trait::async_trait;

/// The book persistence backend as consumed by the UI.
///
/// Every method maps to exactly one request. Implementations report any
/// non-2xx answer or transport failure as an error; callers decide how much
/// of that detail to surface.
#[async_trait]
pub trait BookService: Send + Sync {
    /// List every book, in the order the backend returns them
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Create a new book record
    async fn add_book(&self, book: &Book) -> Result<()>;

    /// Replace the record whose id matches `book.id`
    async fn update_book(&self, book: &Book) -> Result<()>;

    /// Delete a book, returning the backend's confirmation text
    async fn delete_book(&self, id: BookId) -> Result<String>;

    /// Fetch a single book.
    ///
    /// `id` is passed through as typed by the user, so it is not required to
    /// be numeric.
    async fn get_book(&self, id: &str) -> Result<Book>;
}
