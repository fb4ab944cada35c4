//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the bridge.

use url::Url;
use uuid::Uuid;
use crate::utils::errors::Result;

/// Generate a new request id for a dispatched action
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Encode a user-supplied id as a single URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Join the backend base URL with an absolute API path.
///
/// Any path already present on the base URL is kept as a prefix.
pub fn join_url(base_url: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let prefixed = format!("{}/", base.path());
        base.set_path(&prefixed);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// A form value counts as filled when it is non-empty
pub fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
