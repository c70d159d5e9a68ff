//! Configuration types for the Bookshelf client.

use serde::{Deserialize, Serialize};

/// Path prefix every book endpoint lives under.
pub const BOOK_API_PREFIX: &str = "bookapi";

/// Configuration for connecting to a book API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    pub api_url: String,
}

impl ClientConfig {
    /// Create a new client config for the given base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}
