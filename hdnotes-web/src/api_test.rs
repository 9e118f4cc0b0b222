//! Tests for the API client functionality
//!
//! Validates client construction, bearer-token handling and the endpoint
//! paths used for auth and notes operations.

#[cfg(test)]
mod tests {
    use crate::api::{HdNotesClient, json_truthy};
    use serde_json::{Value, json};
    use shared::models::{Note, NotePayload, SendOtpRequest, VerifyOtpRequest};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let client = HdNotesClient::new("http://localhost:8080/api");
        assert_eq!(client.current_bearer_token(), None);
    }

    /// Tests that a trailing slash in the base URL is tolerated
    #[test]
    fn test_base_url_trailing_slash() {
        let client = HdNotesClient::new("http://localhost:8080/api/");
        // Token handling is unaffected by URL normalization.
        client.set_bearer_token(Some("t".to_string()));
        assert_eq!(client.current_bearer_token(), Some("t".to_string()));
    }

    /// Tests bearer token set/replace/clear
    #[test]
    fn test_bearer_token_lifecycle() {
        let client = HdNotesClient::new("/api");
        assert_eq!(client.current_bearer_token(), None);

        client.set_bearer_token(Some("first".to_string()));
        assert_eq!(client.current_bearer_token(), Some("first".to_string()));

        client.set_bearer_token(Some("second".to_string()));
        assert_eq!(client.current_bearer_token(), Some("second".to_string()));

        client.set_bearer_token(None);
        assert_eq!(client.current_bearer_token(), None);
    }

    /// Tests that clones share one token slot
    #[test]
    fn test_clones_share_token() {
        let client = HdNotesClient::new("/api");
        let clone = client.clone();
        client.set_bearer_token(Some("shared".to_string()));
        assert_eq!(clone.current_bearer_token(), Some("shared".to_string()));
    }

    /// Tests notes endpoint paths
    #[test]
    fn test_notes_endpoints() {
        let note_id = "64f1c0ffee";

        let list_url = "/api/notes".to_string();
        assert_eq!(list_url, "/api/notes");

        let item_url = format!("/api/notes/{}", note_id);
        assert_eq!(item_url, "/api/notes/64f1c0ffee");
    }

    /// Tests auth endpoint paths
    #[test]
    fn test_auth_endpoints() {
        let send_url = "/api/users/send-otp";
        let verify_url = "/api/users/verify-otp";
        let register_url = "/api/users/register";
        let login_url = "/api/users/login";
        let profile_url = "/api/users/profile";

        assert!(send_url.ends_with("send-otp"));
        assert!(verify_url.ends_with("verify-otp"));
        assert!(register_url.ends_with("register"));
        assert!(login_url.ends_with("login"));
        assert!(profile_url.ends_with("profile"));
    }

    /// Tests OTP request payload shapes
    #[test]
    fn test_otp_request_payloads() {
        let send = SendOtpRequest {
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_string(&send).expect("serializable");
        assert_eq!(json, r#"{"email":"ada@example.com"}"#);

        let verify = VerifyOtpRequest {
            email: "ada@example.com".to_string(),
            otp: "123456".to_string(),
        };
        let json = serde_json::to_string(&verify).expect("serializable");
        assert_eq!(json, r#"{"email":"ada@example.com","otp":"123456"}"#);
    }

    /// Tests the truthiness check applied to verify-otp responses
    #[test]
    fn test_json_truthy_falsy_values() {
        assert!(!json_truthy(&Value::Null));
        assert!(!json_truthy(&json!(false)));
        assert!(!json_truthy(&json!("")));
        assert!(!json_truthy(&json!(0)));
        assert!(!json_truthy(&json!(0.0)));
    }

    /// Tests the truthiness check's accepting values
    #[test]
    fn test_json_truthy_truthy_values() {
        assert!(json_truthy(&json!(true)));
        assert!(json_truthy(&json!("verified")));
        assert!(json_truthy(&json!(1)));
        assert!(json_truthy(&json!({ "verified": true })));
        assert!(json_truthy(&json!([])));
    }

    /// Tests the note model the endpoints exchange
    #[test]
    fn test_note_model() {
        let note = Note {
            id: "64f1c0ffee".to_string(),
            title: "Test Note".to_string(),
            content: "Body".to_string(),
        };
        assert!(!note.id.is_empty());
        assert!(!note.title.is_empty());

        let payload = NotePayload {
            title: note.title.clone(),
            content: note.content.clone(),
        };
        assert_eq!(payload.title, "Test Note");
    }
}
