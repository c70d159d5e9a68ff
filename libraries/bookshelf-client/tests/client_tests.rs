//! Tests for the Bookshelf HTTP client.
//!
//! These tests use mock servers to verify request shapes and response
//! handling without a real backend.

use bookshelf_client::{ClientConfig, HttpBookService};
use bookshelf_core::{Book, BookService, BookshelfError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dune() -> Book {
    Book {
        id: 1,
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        price: 15.0,
        published_year: 1965,
        stock: 10,
    }
}

fn dune_json() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Dune",
        "author": "Herbert",
        "genre": "SciFi",
        "price": 15.0,
        "publishedYear": 1965,
        "stock": 10
    })
}

fn service_for(server: &MockServer) -> HttpBookService {
    HttpBookService::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        match HttpBookService::new(ClientConfig::new("  ")).unwrap_err() {
            BookshelfError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match HttpBookService::new(ClientConfig::new("example.com")).unwrap_err() {
            BookshelfError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_base_url_gets_api_prefix() {
        let client = HttpBookService::new(ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/bookapi");
    }
}

// =============================================================================
// List Tests
// =============================================================================

mod list {
    use super::*;

    #[tokio::test]
    async fn test_list_preserves_server_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 5, "title": "B", "author": "b", "genre": "g", "price": 2, "publishedYear": 2001, "stock": 1},
                {"id": 2, "title": "A", "author": "a", "genre": "g", "price": 1.5, "publishedYear": 1999, "stock": 0}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let books = service_for(&mock_server).list_books().await.unwrap();

        let ids: Vec<_> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(books[1].price, 1.5);
    }

    #[tokio::test]
    async fn test_list_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/all"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let result = service_for(&mock_server).list_books().await;

        match result.unwrap_err() {
            BookshelfError::Status { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            e => panic!("Expected Status error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/all"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let result = service_for(&mock_server).list_books().await;

        match result.unwrap_err() {
            BookshelfError::Parse(_) => {}
            e => panic!("Expected Parse error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = HttpBookService::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        match client.list_books().await.unwrap_err() {
            BookshelfError::Unreachable(_) | BookshelfError::Request(_) => {}
            e => panic!("Expected Unreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Mutation Tests
// =============================================================================

mod mutations {
    use super::*;

    #[tokio::test]
    async fn test_add_posts_full_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bookapi/add"))
            .and(body_json(dune_json()))
            .respond_with(ResponseTemplate::new(201).set_body_json(dune_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = service_for(&mock_server).add_book(&dune()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_add_rejected_by_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bookapi/add"))
            .respond_with(ResponseTemplate::new(409).set_body_string("duplicate id"))
            .mount(&mock_server)
            .await;

        let error = service_for(&mock_server)
            .add_book(&dune())
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(409));
    }

    #[tokio::test]
    async fn test_update_puts_full_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/bookapi/update"))
            .and(body_json(dune_json()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = service_for(&mock_server).update_book(&dune()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_returns_server_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/bookapi/delete/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Book deleted with id 2"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = service_for(&mock_server).delete_book(2).await.unwrap();
        assert_eq!(text, "Book deleted with id 2");
    }

    #[tokio::test]
    async fn test_delete_missing_book_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/bookapi/delete/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let error = service_for(&mock_server)
            .delete_book(42)
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(404));
    }
}

// =============================================================================
// Lookup Tests
// =============================================================================

mod lookup {
    use super::*;

    #[tokio::test]
    async fn test_get_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/get/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dune_json()))
            .mount(&mock_server)
            .await;

        let book = service_for(&mock_server).get_book("1").await.unwrap();
        assert_eq!(book, dune());
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/get/999"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let error = service_for(&mock_server)
            .get_book("999")
            .await
            .unwrap_err();
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_get_with_empty_body_fails_to_parse() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bookapi/get/3"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        match service_for(&mock_server)
            .get_book("3")
            .await
            .unwrap_err()
        {
            BookshelfError::Parse(_) => {}
            e => panic!("Expected Parse error, got: {:?}", e),
        }
    }
}
