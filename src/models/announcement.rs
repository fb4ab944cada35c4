//! Announcement model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub content: Option<String>,
    #[serde(default)]
    pub created_by: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    /// Creator's user id as typed
    pub created_by: String,
}
