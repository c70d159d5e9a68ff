//! Mapping of HTTP failures onto `BookshelfError`.

use bookshelf_core::BookshelfError;
use reqwest::Response;

/// Classify a transport failure.
pub(crate) fn request_error(e: reqwest::Error) -> BookshelfError {
    if e.is_connect() || e.is_timeout() {
        BookshelfError::Unreachable(e.to_string())
    } else {
        BookshelfError::Request(e.to_string())
    }
}

/// Pass 2xx responses through, turn anything else into `BookshelfError::Status`.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, BookshelfError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(BookshelfError::Status {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
