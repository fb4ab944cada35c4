//! Data models module
//!
//! This module contains the request and response shapes exchanged with the backend

pub mod user;
pub mod event;
pub mod announcement;
pub mod response;
pub mod scalar;

// Re-export commonly used models
pub use user::{User, RegisterRequest, LoginRequest, UpdateUserRequest};
pub use event::{Event, CreateEventRequest};
pub use announcement::{Announcement, CreateAnnouncementRequest};
pub use response::{MessageResponse, LoginResponse, UserResponse, UsersEnvelope, EventsEnvelope, AnnouncementsEnvelope};
