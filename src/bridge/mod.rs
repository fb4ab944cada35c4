//! Form-to-API bridge
//!
//! One operation per user action. Each reads its form fields from the
//! [`Document`], issues one backend request through the [`ApiClient`] and then
//! either re-renders a list container or shows the backend's message. Actions
//! keep no state between calls.

pub mod action;
pub mod forms;
pub mod guard;
pub mod render;

pub use action::Action;
pub use guard::{InFlightGuard, InFlightTicket};

use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use crate::config::Settings;
use crate::config::PagesConfig;
use crate::document::{ids, Document};
use crate::services::{ApiClient, HttpClient, LoginOutcome, UserLookup};
use crate::utils::errors::{BridgeError, Result};
use crate::utils::helpers::{generate_request_id, is_filled};
use crate::utils::logging::{log_action, log_api_error, log_backend_message};

pub const LOGIN_MISSING_CREDENTIALS: &str = "Email and password are required!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGOUT_MESSAGE: &str = "You have been logged out!";
pub const USER_ID_REQUIRED: &str = "User id is required!";
pub const EVENT_ID_REQUIRED: &str = "Event id is required!";
pub const ANNOUNCEMENT_ID_REQUIRED: &str = "Announcement id is required!";

/// What an action did to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A notification with this text was shown
    Notified(String),
    /// A container was re-rendered with this many items
    Rendered { container: &'static str, count: usize },
    /// The page navigated away
    Navigated(String),
    /// A presence check failed; no request was sent
    Blocked(String),
    /// The same action was already in flight; nothing happened
    Busy,
    /// The action failed; an error notification was shown
    Failed(String),
}

/// The bridge between the page and the backend
#[derive(Clone)]
pub struct Bridge {
    api: ApiClient,
    document: Arc<dyn Document>,
    pages: PagesConfig,
    guard: InFlightGuard,
}

impl Bridge {
    /// Create a new Bridge from its collaborators
    pub fn new(api: ApiClient, document: Arc<dyn Document>, pages: PagesConfig, guard: InFlightGuard) -> Self {
        Self { api, document, pages, guard }
    }

    /// Build a bridge over a transport using the configured pages and guard
    pub fn from_settings(settings: &Settings, http: Arc<dyn HttpClient>, document: Arc<dyn Document>) -> Self {
        Self::new(
            ApiClient::new(http),
            document,
            settings.pages.clone(),
            InFlightGuard::new(settings.features.in_flight_guard),
        )
    }

    pub fn guard(&self) -> &InFlightGuard {
        &self.guard
    }

    /// Handle a click on the button with the given id
    pub async fn click(&self, button_id: &str) -> Result<Outcome> {
        let action = Action::from_button_id(button_id)
            .ok_or_else(|| BridgeError::InvalidInput(format!("No action bound to {}", button_id)))?;
        Ok(self.dispatch(action).await)
    }

    /// Run an action as a user trigger would.
    ///
    /// Errors never escape: they are logged and shown as a notification. A
    /// trigger while the same action is in flight is dropped.
    pub async fn dispatch(&self, action: Action) -> Outcome {
        let Some(_ticket) = self.guard.try_acquire(action) else {
            debug!(action = %action, "Action already in flight, ignoring trigger");
            return Outcome::Busy;
        };

        let request_id = generate_request_id();
        let span = info_span!("action", action = %action, request_id = %request_id);

        async {
            log_action(action.name(), &request_id, None);

            match self.run(action).await {
                Ok(outcome) => {
                    debug!(outcome = ?outcome, "Action finished");
                    outcome
                }
                Err(e) => {
                    log_api_error(action.name(), &e.to_string(), Some(e.severity().to_string().as_str()));
                    let notice = format!("Request failed: {}", e);
                    self.document.alert(&notice);
                    Outcome::Failed(notice)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Run an action without the in-flight guard, returning any error
    pub async fn run(&self, action: Action) -> Result<Outcome> {
        match action {
            Action::Register => self.register().await,
            Action::Login => self.login().await,
            Action::FetchUsers => self.fetch_users().await,
            Action::FetchEvents => self.fetch_events().await,
            Action::FetchAnnouncements => self.fetch_announcements().await,
            Action::CreateEvent => self.create_event().await,
            Action::CreateAnnouncement => self.create_announcement().await,
            Action::UpdateUser => self.update_user().await,
            Action::DeleteEvent => self.delete_event().await,
            Action::ShowUser => self.show_user().await,
            Action::DeactivateUser => self.deactivate_user().await,
            Action::DeleteAnnouncement => self.delete_announcement().await,
            Action::Logout => Ok(self.logout()),
        }
    }

    pub async fn register(&self) -> Result<Outcome> {
        let request = forms::read_register(self.document.as_ref())?;
        let response = self.api.register(&request).await?;
        Ok(self.notify(Action::Register, response.message))
    }

    pub async fn login(&self) -> Result<Outcome> {
        let request = forms::read_login(self.document.as_ref())?;
        if !request.is_complete() {
            return Ok(self.block(LOGIN_MISSING_CREDENTIALS));
        }

        match self.api.login(&request).await? {
            LoginOutcome::Accepted { .. } => {
                info!(email = %request.email, "Login accepted");
                self.document.alert(LOGIN_SUCCESS);
                self.document.navigate(&self.pages.after_login);
                Ok(Outcome::Navigated(self.pages.after_login.clone()))
            }
            LoginOutcome::Rejected { status, message } => {
                info!(email = %request.email, status = status, "Login rejected");
                Ok(self.notify(Action::Login, message))
            }
        }
    }

    pub async fn fetch_users(&self) -> Result<Outcome> {
        let users = self.api.list_users().await?;
        let count = render::render_list(self.document.as_ref(), ids::USER_LIST, users.iter().map(render::user_line))?;
        Ok(Outcome::Rendered { container: ids::USER_LIST, count })
    }

    pub async fn fetch_events(&self) -> Result<Outcome> {
        let events = self.api.list_events().await?;
        let count = render::render_list(self.document.as_ref(), ids::EVENT_LIST, events.iter().map(render::event_line))?;
        Ok(Outcome::Rendered { container: ids::EVENT_LIST, count })
    }

    pub async fn fetch_announcements(&self) -> Result<Outcome> {
        let announcements = self.api.list_announcements().await?;
        let count = render::render_list(
            self.document.as_ref(),
            ids::ANNOUNCEMENT_LIST,
            announcements.iter().map(render::announcement_line),
        )?;
        Ok(Outcome::Rendered { container: ids::ANNOUNCEMENT_LIST, count })
    }

    pub async fn create_event(&self) -> Result<Outcome> {
        let request = forms::read_create_event(self.document.as_ref())?;
        let response = self.api.create_event(&request).await?;
        Ok(self.notify(Action::CreateEvent, response.message))
    }

    pub async fn create_announcement(&self) -> Result<Outcome> {
        let request = forms::read_create_announcement(self.document.as_ref())?;
        let response = self.api.create_announcement(&request).await?;
        Ok(self.notify(Action::CreateAnnouncement, response.message))
    }

    pub async fn update_user(&self) -> Result<Outcome> {
        let (user_id, request) = forms::read_update_user(self.document.as_ref())?;
        if !is_filled(&user_id) {
            return Ok(self.block(USER_ID_REQUIRED));
        }

        let response = self.api.update_user(&user_id, &request).await?;
        Ok(self.notify(Action::UpdateUser, response.message))
    }

    pub async fn delete_event(&self) -> Result<Outcome> {
        let event_id = self.document.value(ids::DELETE_EVENT_ID)?;
        if !is_filled(&event_id) {
            return Ok(self.block(EVENT_ID_REQUIRED));
        }

        let response = self.api.delete_event(&event_id).await?;
        Ok(self.notify(Action::DeleteEvent, response.message))
    }

    pub async fn show_user(&self) -> Result<Outcome> {
        let user_id = self.document.value(ids::SHOW_USER_ID)?;
        if !is_filled(&user_id) {
            return Ok(self.block(USER_ID_REQUIRED));
        }

        match self.api.get_user(&user_id).await? {
            UserLookup::Found(user) => {
                let count = render::render_list(
                    self.document.as_ref(),
                    ids::USER_DETAIL,
                    std::iter::once(render::user_line(&user)),
                )?;
                Ok(Outcome::Rendered { container: ids::USER_DETAIL, count })
            }
            UserLookup::Missing(message) => Ok(self.notify(Action::ShowUser, message)),
        }
    }

    pub async fn deactivate_user(&self) -> Result<Outcome> {
        let user_id = self.document.value(ids::DEACTIVATE_USER_ID)?;
        if !is_filled(&user_id) {
            return Ok(self.block(USER_ID_REQUIRED));
        }

        let response = self.api.deactivate_user(&user_id).await?;
        Ok(self.notify(Action::DeactivateUser, response.message))
    }

    pub async fn delete_announcement(&self) -> Result<Outcome> {
        let announcement_id = self.document.value(ids::DELETE_ANNOUNCEMENT_ID)?;
        if !is_filled(&announcement_id) {
            return Ok(self.block(ANNOUNCEMENT_ID_REQUIRED));
        }

        let response = self.api.delete_announcement(&announcement_id).await?;
        Ok(self.notify(Action::DeleteAnnouncement, response.message))
    }

    /// Purely local: no request is sent
    pub fn logout(&self) -> Outcome {
        self.document.alert(LOGOUT_MESSAGE);
        self.document.navigate(&self.pages.after_logout);
        Outcome::Navigated(self.pages.after_logout.clone())
    }

    fn notify(&self, action: Action, message: String) -> Outcome {
        log_backend_message(action.name(), &message);
        self.document.alert(&message);
        Outcome::Notified(message)
    }

    fn block(&self, reason: &str) -> Outcome {
        debug!(reason = reason, "Presence check failed, no request sent");
        self.document.alert(reason);
        Outcome::Blocked(reason.to_string())
    }
}
