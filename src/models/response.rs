//! Backend response shapes
//!
//! Every mutating endpoint answers with a `message`; list endpoints wrap their
//! records in a named envelope. Both are decoded strictly: a body without the
//! expected field is rejected instead of rendered as a placeholder.

use serde::{Deserialize, Serialize};
use super::{Announcement, Event, User};

/// `{message}` answer of the mutating endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Answer of `POST /users/login`.
///
/// A successful login may omit `message`; rejections are decoded as
/// [`MessageResponse`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Answer of `GET /users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsEnvelope {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementsEnvelope {
    pub announcements: Vec<Announcement>,
}
