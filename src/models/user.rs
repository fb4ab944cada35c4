//! User model

use serde::{Deserialize, Serialize};

/// A user as returned by the list and lookup endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "super::scalar::text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Free-form; the backend decides which roles exist
    pub role: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Both credentials must be filled before a request is sent
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Sparse update body for `PUT /users/update/{id}`.
///
/// Only filled fields are serialized, except `is_active` which is always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    pub is_active: bool,
}

impl UpdateUserRequest {
    /// Build a sparse update from raw form values.
    ///
    /// A password change carries the current password as typed, even when empty.
    pub fn from_form(
        first_name: &str,
        last_name: &str,
        email: &str,
        new_password: &str,
        current_password: &str,
        is_active: bool,
    ) -> Self {
        let filled = |value: &str| (!value.is_empty()).then(|| value.to_string());
        let password_change = !new_password.is_empty();

        Self {
            first_name: filled(first_name),
            last_name: filled(last_name),
            email: filled(email),
            new_password: password_change.then(|| new_password.to_string()),
            current_password: password_change.then(|| current_password.to_string()),
            is_active,
        }
    }
}
