//! Event model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub created_at: Option<String>,
}

/// Body for `POST /events/create`, values exactly as typed into the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub created_by: String,
}
