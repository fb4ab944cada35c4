//! Reading form fields into request payloads

use crate::document::{ids, Document};
use crate::models::{
    CreateAnnouncementRequest, CreateEventRequest, LoginRequest, RegisterRequest, UpdateUserRequest,
};
use crate::utils::errors::Result;

pub fn read_register(document: &dyn Document) -> Result<RegisterRequest> {
    Ok(RegisterRequest {
        first_name: document.value(ids::REGISTER_FIRST_NAME)?,
        last_name: document.value(ids::REGISTER_LAST_NAME)?,
        email: document.value(ids::REGISTER_EMAIL)?,
        password: document.value(ids::REGISTER_PASSWORD)?,
        role: document.value(ids::REGISTER_ROLE)?,
        is_active: document.checked(ids::REGISTER_ACTIVE)?,
    })
}

pub fn read_login(document: &dyn Document) -> Result<LoginRequest> {
    Ok(LoginRequest {
        email: document.value(ids::LOGIN_EMAIL)?,
        password: document.value(ids::LOGIN_PASSWORD)?,
    })
}

/// Target user id and the sparse update body
pub fn read_update_user(document: &dyn Document) -> Result<(String, UpdateUserRequest)> {
    let user_id = document.value(ids::UPDATE_USER_ID)?;
    let request = UpdateUserRequest::from_form(
        &document.value(ids::UPDATE_FIRST_NAME)?,
        &document.value(ids::UPDATE_LAST_NAME)?,
        &document.value(ids::UPDATE_EMAIL)?,
        &document.value(ids::UPDATE_PASSWORD)?,
        &document.value(ids::UPDATE_CURRENT_PASSWORD)?,
        document.checked(ids::UPDATE_ACTIVE)?,
    );
    Ok((user_id, request))
}

pub fn read_create_event(document: &dyn Document) -> Result<CreateEventRequest> {
    Ok(CreateEventRequest {
        title: document.value(ids::EVENT_TITLE)?,
        description: document.value(ids::EVENT_DESCRIPTION)?,
        start_date: document.value(ids::EVENT_START_DATE)?,
        end_date: document.value(ids::EVENT_END_DATE)?,
        created_by: document.value(ids::EVENT_CREATED_BY)?,
    })
}

pub fn read_create_announcement(document: &dyn Document) -> Result<CreateAnnouncementRequest> {
    Ok(CreateAnnouncementRequest {
        title: document.value(ids::ANNOUNCEMENT_TITLE)?,
        content: document.value(ids::ANNOUNCEMENT_CONTENT)?,
        created_by: document.value(ids::ANNOUNCEMENT_CREATED_BY)?,
    })
}
