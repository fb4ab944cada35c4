//! Services module
//!
//! This module contains the backend transport and the typed API client

pub mod api;
pub mod http;

// Re-export commonly used services
pub use api::{ApiClient, LoginOutcome, UserLookup, LOGIN_OK_STATUS};
pub use http::{ApiRequest, ApiResponse, HttpClient, ReqwestClient};
