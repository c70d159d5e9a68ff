/// Core domain types for Bookshelf
mod book;
mod form;
mod message;

pub use book::{Book, BookId};
pub use form::{BookForm, FormField};
pub use message::Message;
