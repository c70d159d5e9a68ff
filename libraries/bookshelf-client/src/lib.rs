//! Bookshelf Client
//!
//! HTTP client library for a book inventory REST API.
//!
//! # Endpoints
//!
//! Everything lives under `{api_url}/bookapi`:
//!
//! - **List**: `GET /all`
//! - **Create**: `POST /add`
//! - **Replace**: `PUT /update`
//! - **Delete**: `DELETE /delete/{id}`, answers with a confirmation text
//! - **Lookup**: `GET /get/{id}`
//!
//! # Example
//!
//! ```ignore
//! use bookshelf_client::{ClientConfig, HttpBookService};
//! use bookshelf_core::BookService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpBookService::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     for book in service.list_books().await? {
//!         println!("{} by {}", book.title, book.author);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::HttpBookService;
pub use types::{ClientConfig, BOOK_API_PREFIX};
