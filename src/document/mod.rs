//! Document capability
//!
//! The bridge reads form fields and writes list containers through the
//! [`Document`] trait. Elements are addressed by the stable ids in [`ids`].

pub mod memory;

pub use memory::{FormSnapshot, MemoryDocument};

use crate::utils::errors::Result;

/// Stable element ids of the admin page
pub mod ids {
    pub const REGISTER_FIRST_NAME: &str = "register-firstname";
    pub const REGISTER_LAST_NAME: &str = "register-lastname";
    pub const REGISTER_EMAIL: &str = "register-email";
    pub const REGISTER_PASSWORD: &str = "register-password";
    pub const REGISTER_ROLE: &str = "register-role";
    pub const REGISTER_ACTIVE: &str = "register-active";

    pub const LOGIN_EMAIL: &str = "login-email";
    pub const LOGIN_PASSWORD: &str = "login-password";

    pub const UPDATE_USER_ID: &str = "update-user-id";
    pub const UPDATE_FIRST_NAME: &str = "update-firstname";
    pub const UPDATE_LAST_NAME: &str = "update-lastname";
    pub const UPDATE_EMAIL: &str = "update-email";
    pub const UPDATE_PASSWORD: &str = "update-password";
    pub const UPDATE_CURRENT_PASSWORD: &str = "update-current-password";
    pub const UPDATE_ACTIVE: &str = "update-active";

    pub const SHOW_USER_ID: &str = "show-user-id";
    pub const DEACTIVATE_USER_ID: &str = "deactivate-user-id";

    pub const EVENT_TITLE: &str = "event-title";
    pub const EVENT_DESCRIPTION: &str = "event-description";
    pub const EVENT_START_DATE: &str = "event-start-date";
    pub const EVENT_END_DATE: &str = "event-end-date";
    pub const EVENT_CREATED_BY: &str = "event-created-by";
    pub const DELETE_EVENT_ID: &str = "delete-event-id";

    pub const ANNOUNCEMENT_TITLE: &str = "announcement-title";
    pub const ANNOUNCEMENT_CONTENT: &str = "announcement-content";
    pub const ANNOUNCEMENT_CREATED_BY: &str = "announcement-created-by";
    pub const DELETE_ANNOUNCEMENT_ID: &str = "delete-announcement-id";

    pub const USER_LIST: &str = "user-list";
    pub const USER_DETAIL: &str = "user-detail";
    pub const EVENT_LIST: &str = "event-list";
    pub const ANNOUNCEMENT_LIST: &str = "announcement-list";

    /// Text and select inputs
    pub const TEXT_FIELDS: &[&str] = &[
        REGISTER_FIRST_NAME, REGISTER_LAST_NAME, REGISTER_EMAIL, REGISTER_PASSWORD, REGISTER_ROLE,
        LOGIN_EMAIL, LOGIN_PASSWORD,
        UPDATE_USER_ID, UPDATE_FIRST_NAME, UPDATE_LAST_NAME, UPDATE_EMAIL, UPDATE_PASSWORD,
        UPDATE_CURRENT_PASSWORD,
        SHOW_USER_ID, DEACTIVATE_USER_ID,
        EVENT_TITLE, EVENT_DESCRIPTION, EVENT_START_DATE, EVENT_END_DATE, EVENT_CREATED_BY,
        DELETE_EVENT_ID,
        ANNOUNCEMENT_TITLE, ANNOUNCEMENT_CONTENT, ANNOUNCEMENT_CREATED_BY, DELETE_ANNOUNCEMENT_ID,
    ];

    pub const CHECKBOXES: &[&str] = &[REGISTER_ACTIVE, UPDATE_ACTIVE];

    pub const LISTS: &[&str] = &[USER_LIST, USER_DETAIL, EVENT_LIST, ANNOUNCEMENT_LIST];
}

/// Document-manipulation capability
pub trait Document: Send + Sync {
    /// Current value of a text or select input
    fn value(&self, id: &str) -> Result<String>;

    /// Current state of a checkbox
    fn checked(&self, id: &str) -> Result<bool>;

    /// Remove every child of a container
    fn clear(&self, id: &str) -> Result<()>;

    /// Append one line item to a container; the text is inserted as plain text
    fn append_item(&self, id: &str, text: &str) -> Result<()>;

    /// Show a blocking notification
    fn alert(&self, message: &str);

    /// Navigate to another page
    fn navigate(&self, page: &str);
}
