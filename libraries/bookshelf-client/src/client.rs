//! HTTP implementation of `BookService`.

use crate::error::{ensure_success, request_error};
use crate::types::{ClientConfig, BOOK_API_PREFIX};
use async_trait::async_trait;
use bookshelf_core::{Book, BookId, BookService, BookshelfError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for a book REST API.
///
/// All endpoints are resolved under `{api_url}/bookapi`.
///
/// # Example
///
/// ```ignore
/// use bookshelf_client::{ClientConfig, HttpBookService};
/// use bookshelf_core::BookService;
///
/// let service = HttpBookService::new(ClientConfig::new("http://localhost:8080"))?;
/// let books = service.list_books().await?;
/// println!("Found {} books", books.len());
/// ```
#[derive(Debug, Clone)]
pub struct HttpBookService {
    http: Client,
    base: Url,
}

impl HttpBookService {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = normalize_base_url(&config.api_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Bookshelf/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(request_error)?;

        Ok(Self { http, base })
    }

    /// Root of the book endpoints, e.g. `http://localhost:8080/bookapi`.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| BookshelfError::InvalidUrl(self.base.to_string()))?
            .extend(segments);
        Ok(url)
    }
}

/// Validate the configured URL and append the API prefix.
fn normalize_base_url(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(BookshelfError::InvalidUrl("URL cannot be empty".into()));
    }

    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(BookshelfError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    let mut url =
        Url::parse(trimmed).map_err(|e| BookshelfError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    url.path_segments_mut()
        .map_err(|()| BookshelfError::InvalidUrl(trimmed.to_string()))?
        .pop_if_empty()
        .push(BOOK_API_PREFIX);

    Ok(url)
}

#[async_trait]
impl BookService for HttpBookService {
    async fn list_books(&self) -> Result<Vec<Book>> {
        let url = self.endpoint(&["all"])?;
        debug!(url = %url, "Fetching all books");

        let response = self.http.get(url).send().await.map_err(request_error)?;
        let books: Vec<Book> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| BookshelfError::parse(format!("Failed to parse book list: {}", e)))?;

        debug!(count = books.len(), "Fetched books");
        Ok(books)
    }

    async fn add_book(&self, book: &Book) -> Result<()> {
        let url = self.endpoint(&["add"])?;
        debug!(url = %url, book_id = book.id, "Adding book");

        let response = self
            .http
            .post(url)
            .json(book)
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(response).await?;

        info!(book_id = book.id, title = %book.title, "Book added");
        Ok(())
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        let url = self.endpoint(&["update"])?;
        debug!(url = %url, book_id = book.id, "Updating book");

        let response = self
            .http
            .put(url)
            .json(book)
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(response).await?;

        info!(book_id = book.id, "Book updated");
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<String> {
        let url = self.endpoint(&["delete", &id.to_string()])?;
        debug!(url = %url, book_id = id, "Deleting book");

        let response = self.http.delete(url).send().await.map_err(request_error)?;
        let text = ensure_success(response)
            .await?
            .text()
            .await
            .map_err(|e| BookshelfError::parse(format!("Failed to read delete response: {}", e)))?;

        info!(book_id = id, "Book deleted");
        Ok(text)
    }

    async fn get_book(&self, id: &str) -> Result<Book> {
        let url = self.endpoint(&["get", id])?;
        debug!(url = %url, book_id = %id, "Fetching book");

        let response = self.http.get(url).send().await.map_err(request_error)?;
        ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| BookshelfError::parse(format!("Failed to parse book: {}", e)))
    }
}
