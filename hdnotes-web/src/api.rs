use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, RequestBuilder};
use serde_json::Value;
use shared::models::{
    AuthResponse, LoginRequest, Note, NotePayload, ProfileResponse, RegisterRequest,
    SendOtpRequest, VerifyOtpRequest,
};
use std::sync::{Arc, Mutex};

thread_local! {
    static SHARED_CLIENT: OnceCell<HdNotesClient> = OnceCell::new();
}

/// JavaScript-style truthiness for an untyped response body: `null`, `false`,
/// `""` and `0` are falsy, everything else is truthy.
pub(crate) fn json_truthy(body: &Value) -> bool {
    match body {
        Value::Null | Value::Bool(false) => false,
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
    }
}

/// Lightweight API client for HD Notes backend interactions.
///
/// Holds the bearer token behind a single setter so authenticated calls all
/// attach it the same way.
#[derive(Clone, Debug)]
pub struct HdNotesClient {
    base_url: String,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl HdNotesClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            bearer_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The per-tab client instance, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replace the bearer token used for authenticated calls.
    pub fn set_bearer_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token;
        }
    }

    /// The bearer token currently attached to authenticated calls.
    pub fn current_bearer_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_bearer_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Mail a one-time code to the given address.
    pub async fn send_otp(&self, payload: &SendOtpRequest) -> Result<(), Error> {
        let url = self.api_url("users/send-otp");
        self.client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Check a one-time code. A truthy response body means the code matched.
    pub async fn verify_otp(&self, payload: &VerifyOtpRequest) -> Result<bool, Error> {
        let url = self.api_url("users/verify-otp");
        let body: Value = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(json_truthy(&body))
    }

    /// Register a new account, returning the session token.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("users/register");
        let body: AuthResponse = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.set_bearer_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Sign in to an existing account, returning the session token.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, Error> {
        let url = self.api_url("users/login");
        let body: AuthResponse = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.set_bearer_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Retrieve the authenticated user's profile.
    pub async fn get_profile(&self) -> Result<ProfileResponse, Error> {
        let url = self.api_url("users/profile");
        self.apply_auth(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// List the authenticated user's notes.
    pub async fn list_notes(&self) -> Result<Vec<Note>, Error> {
        let url = self.api_url("notes");
        self.apply_auth(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Create a note.
    pub async fn create_note(&self, payload: &NotePayload) -> Result<Note, Error> {
        let url = self.api_url("notes");
        self.apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Update an existing note identified by `note_id`.
    pub async fn update_note(&self, note_id: &str, payload: &NotePayload) -> Result<Note, Error> {
        let url = self.api_url(&format!("notes/{note_id}"));
        self.apply_auth(self.client.put(url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Delete a note identified by `note_id`.
    pub async fn delete_note(&self, note_id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("notes/{note_id}"));
        self.apply_auth(self.client.delete(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
