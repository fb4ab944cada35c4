//! Backend API client
//!
//! Typed calls for every endpoint the bridge uses. Mutating endpoints answer
//! with a `{message}` body whatever their status; the client hands that message
//! back untouched and leaves status interpretation to the caller.

use std::sync::Arc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use crate::models::{
    Announcement, AnnouncementsEnvelope, CreateAnnouncementRequest, CreateEventRequest, Event,
    EventsEnvelope, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    UpdateUserRequest, User, UserResponse, UsersEnvelope,
};
use crate::utils::errors::{BridgeError, Result};
use crate::utils::helpers::encode_path_segment;
use crate::utils::logging::log_api_call;
use super::http::{ApiRequest, ApiResponse, HttpClient};

/// Status code the backend uses for a successful login
pub const LOGIN_OK_STATUS: u16 = 200;

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// HTTP 200; the body's `message` is not needed
    Accepted { user: Option<User> },
    /// Any other status, with the backend's explanation
    Rejected { status: u16, message: String },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Accepted { .. })
    }
}

/// Result of a single-user lookup
#[derive(Debug, Clone, PartialEq)]
pub enum UserLookup {
    Found(User),
    /// The backend's explanation, e.g. an unknown id
    Missing(String),
}

/// Typed client over an injected transport
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
}

impl ApiClient {
    /// Create a new ApiClient over the given transport
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// `POST /users/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse> {
        let body = serde_json::to_value(request)?;
        let response = self.send(ApiRequest::post("/users/register", body)).await?;
        decode(&response)
    }

    /// `POST /users/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome> {
        let body = serde_json::to_value(request)?;
        let response = self.send(ApiRequest::post("/users/login", body)).await?;
        login_outcome(&response)
    }

    /// `GET /users/getall`
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.send(ApiRequest::get("/users/getall")).await?;
        let envelope: UsersEnvelope = decode_list(&response)?;
        Ok(envelope.users)
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, user_id: &str) -> Result<UserLookup> {
        let path = format!("/users/{}", encode_path_segment(user_id));
        let response = self.send(ApiRequest::get(path)).await?;

        if response.is_success() {
            let found: UserResponse = decode(&response)?;
            Ok(UserLookup::Found(found.user))
        } else {
            let missing: MessageResponse = decode(&response)?;
            Ok(UserLookup::Missing(missing.message))
        }
    }

    /// `PUT /users/update/{id}` with a sparse body
    pub async fn update_user(&self, user_id: &str, request: &UpdateUserRequest) -> Result<MessageResponse> {
        let path = format!("/users/update/{}", encode_path_segment(user_id));
        let body = serde_json::to_value(request)?;
        let response = self.send(ApiRequest::put(path, Some(body))).await?;
        decode(&response)
    }

    /// `PUT /users/deactivate/{id}`
    pub async fn deactivate_user(&self, user_id: &str) -> Result<MessageResponse> {
        let path = format!("/users/deactivate/{}", encode_path_segment(user_id));
        let response = self.send(ApiRequest::put(path, None)).await?;
        decode(&response)
    }

    /// `GET /events/getall`
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.send(ApiRequest::get("/events/getall")).await?;
        let envelope: EventsEnvelope = decode_list(&response)?;
        Ok(envelope.events)
    }

    /// `POST /events/create`
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<MessageResponse> {
        let body = serde_json::to_value(request)?;
        let response = self.send(ApiRequest::post("/events/create", body)).await?;
        decode(&response)
    }

    /// `DELETE /events/delete/{id}`
    pub async fn delete_event(&self, event_id: &str) -> Result<MessageResponse> {
        let path = format!("/events/delete/{}", encode_path_segment(event_id));
        let response = self.send(ApiRequest::delete(path)).await?;
        decode(&response)
    }

    /// `GET /announcements/getall`
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        let response = self.send(ApiRequest::get("/announcements/getall")).await?;
        let envelope: AnnouncementsEnvelope = decode_list(&response)?;
        Ok(envelope.announcements)
    }

    /// `POST /announcements/create`
    pub async fn create_announcement(&self, request: &CreateAnnouncementRequest) -> Result<MessageResponse> {
        let body = serde_json::to_value(request)?;
        let response = self.send(ApiRequest::post("/announcements/create", body)).await?;
        decode(&response)
    }

    /// `DELETE /announcements/delete/{id}`
    pub async fn delete_announcement(&self, announcement_id: &str) -> Result<MessageResponse> {
        let path = format!("/announcements/delete/{}", encode_path_segment(announcement_id));
        let response = self.send(ApiRequest::delete(path)).await?;
        decode(&response)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = request.method.to_string();
        let path = request.path.clone();
        let response = self.http.send(request).await?;
        log_api_call(&method, &path, response.status);
        Ok(response)
    }
}

/// Decode a JSON body into the expected shape
fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| {
        debug!(status = response.status, error = %e, "Backend body did not match the expected shape");
        BridgeError::InvalidResponse(format!("HTTP {}: {}", response.status, e))
    })
}

/// Interpret a login answer; only a rejection must explain itself
fn login_outcome(response: &ApiResponse) -> Result<LoginOutcome> {
    if response.status == LOGIN_OK_STATUS {
        let accepted: LoginResponse = decode(response)?;
        return Ok(LoginOutcome::Accepted { user: accepted.user });
    }

    let rejected: MessageResponse = decode(response)?;
    Ok(LoginOutcome::Rejected {
        status: response.status,
        message: rejected.message,
    })
}

/// Decode a list envelope; a failed list request surfaces the backend's message
fn decode_list<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    if !response.is_success() {
        let message = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| response.body.clone());
        return Err(BridgeError::Backend {
            status: response.status,
            message,
        });
    }

    decode(response)
}
