//! FormBridge
//!
//! Wires the admin page's form controls to the user, event and announcement
//! REST API. Each user action reads its fields, sends one request and either
//! re-renders a list or shows the backend's message. The page and the network
//! are injected as the [`document::Document`] and [`services::HttpClient`]
//! capabilities.

#![allow(non_snake_case)]

pub mod bridge;
pub mod config;
pub mod document;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BridgeError, Result};

// Re-export main components for easy access
pub use bridge::{Action, Bridge, Outcome};
pub use document::{Document, MemoryDocument};
pub use services::{ApiClient, HttpClient, ReqwestClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
