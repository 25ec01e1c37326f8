//! Tests for the Trailtips client library.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real API.

use trailtips_client::{ClientConfig, ClientError, TrailtipsClient};
use trailtips_core::{Category, CommentId, ExperienceId, FilterCategory};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_user(id: i64, images: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("user{}@example.com", id),
        "password": "hashed",
        "name": format!("User {}", id),
        "address": "Somewhere",
        "interests": ["hiking"],
        "imagesProfile": images,
        "gender": "Male",
        "bio": "Bio",
        "phoneNumber": "555-0100",
        "dateOfBirth": "1992-07-15T00:00:00.000Z",
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn mock_experience(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Stove in the wind",
        "content": "Use a windscreen",
        "imagesUrl": ["https://cdn.example.com/stove.jpg"],
        "location": "Snowdonia",
        "category": "Tips",
        "filterCategory": "CookingAndEating",
        "likeCounter": 12,
        "shareCounter": 4,
        "userId": 1,
        "createdAt": "2024-03-01T09:00:00Z",
        "user": mock_user(1, &["https://cdn.example.com/u1.png"]),
        "comments": [
            {
                "id": 42,
                "content": "Great tip",
                "experienceId": id,
                "userId": 2,
                "user": mock_user(2, &[])
            }
        ],
        "likes": [
            { "id": 1, "experienceId": id, "userId": 3, "user": mock_user(3, &[]) }
        ],
        "shares": []
    })
}

fn client_for(server: &MockServer) -> TrailtipsClient {
    TrailtipsClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let client = TrailtipsClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_empty_url_rejected() {
        match TrailtipsClient::new(ClientConfig::new("")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        match TrailtipsClient::new(ClientConfig::new("127.0.0.1:5000")).unwrap_err() {
            ClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("Expected InvalidUrl error, got: {:?}", e),
        }
    }

    #[test]
    fn test_multiple_trailing_slashes_removed() {
        let client = TrailtipsClient::new(ClientConfig::new("https://example.com///")).unwrap();
        assert!(!client.url().ends_with('/'));
    }
}

// =============================================================================
// Fetch Experience Tests
// =============================================================================

mod get_experience {
    use super::*;

    #[tokio::test]
    async fn test_fetch_full_aggregate() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/experienceTip/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_experience(7)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let experience = client
            .experiences()
            .get_experience("7")
            .await
            .unwrap()
            .expect("experience body");

        assert_eq!(experience.id, ExperienceId::new(7));
        assert_eq!(experience.title, "Stove in the wind");
        assert_eq!(experience.category, Category::Tips);
        assert_eq!(experience.filter_category, FilterCategory::CookingAndEating);
        assert_eq!(experience.like_counter, 12);
        assert_eq!(experience.share_counter, 4);
        assert_eq!(experience.comments.len(), 1);
        assert_eq!(experience.comments[0].id, CommentId::new(42));
        assert_eq!(experience.likes.len(), 1);
        assert!(experience.shares.is_empty());
        assert_eq!(
            experience.user.avatar(),
            Some("https://cdn.example.com/u1.png")
        );
    }

    #[tokio::test]
    async fn test_null_body_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/experienceTip/8"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.experiences().get_experience("8").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_not_found_is_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/experienceTip/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Experience not found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        match client.experiences().get_experience("404").await.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Experience not found");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/experienceTip/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        match client.experiences().get_experience("1").await.unwrap_err() {
            ClientError::ParseError(msg) => assert!(msg.contains("experience")),
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = TrailtipsClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        match client.experiences().get_experience("1").await.unwrap_err() {
            ClientError::ServerUnreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected ServerUnreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

mod deletes {
    use super::*;

    #[tokio::test]
    async fn test_delete_comment_hits_comment_endpoint_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/comment/42"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .comments()
            .delete_comment(CommentId::new(42))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_delete_experience_reports_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/experienceTip/7"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .experiences()
            .delete_experience(ExperienceId::new(7))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_delete_transport_failure_is_error() {
        let client = TrailtipsClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let result = client.comments().delete_comment(CommentId::new(1)).await;
        assert!(result.is_err());
    }
}
