//! User actions and their trigger buttons

use std::fmt;
use std::str::FromStr;
use crate::utils::errors::BridgeError;

/// Every action the page can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Register,
    Login,
    FetchUsers,
    FetchEvents,
    FetchAnnouncements,
    CreateEvent,
    CreateAnnouncement,
    UpdateUser,
    DeleteEvent,
    ShowUser,
    DeactivateUser,
    DeleteAnnouncement,
    Logout,
}

impl Action {
    pub const ALL: [Action; 13] = [
        Action::Register,
        Action::Login,
        Action::FetchUsers,
        Action::FetchEvents,
        Action::FetchAnnouncements,
        Action::CreateEvent,
        Action::CreateAnnouncement,
        Action::UpdateUser,
        Action::DeleteEvent,
        Action::ShowUser,
        Action::DeactivateUser,
        Action::DeleteAnnouncement,
        Action::Logout,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Action::Register => "register",
            Action::Login => "login",
            Action::FetchUsers => "fetch-users",
            Action::FetchEvents => "fetch-events",
            Action::FetchAnnouncements => "fetch-announcements",
            Action::CreateEvent => "create-event",
            Action::CreateAnnouncement => "create-announcement",
            Action::UpdateUser => "update-user",
            Action::DeleteEvent => "delete-event",
            Action::ShowUser => "show-user",
            Action::DeactivateUser => "deactivate-user",
            Action::DeleteAnnouncement => "delete-announcement",
            Action::Logout => "logout",
        }
    }

    /// Id of the button bound to this action
    pub fn button_id(self) -> String {
        format!("{}-button", self.name())
    }

    pub fn from_button_id(id: &str) -> Option<Action> {
        id.strip_suffix("-button").and_then(Self::from_name)
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Self::ALL.iter().copied().find(|action| action.name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = BridgeError;

    /// Accepts an action name or its button id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_button_id(s))
            .ok_or_else(|| BridgeError::InvalidInput(format!("Unknown action: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ids_match_page_markup() {
        assert_eq!(Action::Register.button_id(), "register-button");
        assert_eq!(Action::FetchUsers.button_id(), "fetch-users-button");
        assert_eq!(Action::DeleteEvent.button_id(), "delete-event-button");
        assert_eq!(Action::Logout.button_id(), "logout-button");
    }

    #[test]
    fn test_every_action_round_trips_through_its_button() {
        for action in Action::ALL {
            assert_eq!(Action::from_button_id(&action.button_id()), Some(action));
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action() {
        assert!("launch-rockets".parse::<Action>().is_err());
        assert_eq!(Action::from_button_id("login"), None);
    }
}
