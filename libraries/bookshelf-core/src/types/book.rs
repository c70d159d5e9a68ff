//! Book types

use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A book record as stored by the backend.
///
/// Serialized with camelCase keys (`publishedYear`) to match the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub published_year: i32,
    pub stock: i32,
}

impl Book {
    /// Pretty-printed JSON, as shown in the lookup panel
    pub fn to_pretty_json(&self) -> String {
        // A struct of plain scalars cannot fail to serialize
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            price: 15.0,
            published_year: 1965,
            stock: 10,
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["publishedYear"], 1965);
        assert!(value.get("published_year").is_none());
    }

    #[test]
    fn test_deserialize_integer_price() {
        let book: Book = serde_json::from_str(
            r#"{"id":7,"title":"Emma","author":"Austen","genre":"Classic","price":9,"publishedYear":1815,"stock":3}"#,
        )
        .unwrap();

        assert_eq!(book.id, 7);
        assert_eq!(book.price, 9.0);
        assert_eq!(book.published_year, 1815);
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let book = Book {
            id: 2,
            title: "X".to_string(),
            author: "Y".to_string(),
            genre: "Z".to_string(),
            price: 1.5,
            published_year: 2000,
            stock: 0,
        };

        let json = book.to_pretty_json();
        assert!(json.contains("\n  \"title\": \"X\""));
    }
}
