//! Bookshelf Core
//!
//! Platform-agnostic domain types, traits, and error handling for Bookshelf.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Book`, the `BookForm` edit buffer and the tagged `Message`
//! - **Core Traits**: `BookService`, the REST backend seen from the UI
//! - **Error Handling**: Unified `BookshelfError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use bookshelf_core::{BookForm, FormField};
//!
//! let mut form = BookForm::empty();
//! form.set(FormField::Title, "Dune");
//!
//! // The first blank field in template order is reported
//! assert_eq!(form.first_missing(), Some(FormField::Id));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{BookshelfError, Result};
pub use traits::BookService;
pub use types::{Book, BookForm, BookId, FormField, Message};
