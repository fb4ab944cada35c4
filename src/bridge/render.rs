//! Line templates and list rendering
//!
//! Record content is inserted as plain text without escaping; markup in
//! server data shows up literally.

use crate::document::Document;
use crate::models::{Announcement, Event, User};
use crate::utils::errors::Result;

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

pub fn user_line(user: &User) -> String {
    format!(
        "{} {} ({}) - Role: {} - Created At: {}",
        text(&user.first_name),
        text(&user.last_name),
        text(&user.email),
        text(&user.role),
        text(&user.created_at),
    )
}

pub fn event_line(event: &Event) -> String {
    format!(
        "{} - {} (Starts: {}, Ends: {})",
        text(&event.title),
        text(&event.description),
        text(&event.start_date),
        text(&event.end_date),
    )
}

pub fn announcement_line(announcement: &Announcement) -> String {
    format!(
        "{} - {} (Created At: {})",
        text(&announcement.title),
        text(&announcement.content),
        text(&announcement.created_at),
    )
}

/// Replace the container's children with one item per line, in order.
///
/// Returns the number of items rendered.
pub fn render_list<I>(document: &dyn Document, container: &str, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = String>,
{
    document.clear(container)?;
    let mut count = 0;
    for line in lines {
        document.append_item(container, &line)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ids, MemoryDocument};

    #[test]
    fn test_user_line_template() {
        let user = User {
            id: Some(1),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            role: Some("admin".to_string()),
            is_active: Some(true),
            created_at: Some("2024-01-01T00:00:00".to_string()),
        };
        assert_eq!(
            user_line(&user),
            "Ada Lovelace (ada@example.com) - Role: admin - Created At: 2024-01-01T00:00:00"
        );
    }

    #[test]
    fn test_event_line_with_missing_description() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "title": "Gala",
            "description": null,
            "start_date": "2024-05-01T19:00:00",
            "end_date": "2024-05-01T23:00:00"
        }))
        .unwrap();
        assert_eq!(event_line(&event), "Gala -  (Starts: 2024-05-01T19:00:00, Ends: 2024-05-01T23:00:00)");
    }

    #[test]
    fn test_user_line_with_numeric_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": 7,
            "email": "ada@example.com",
            "role": 1,
            "created_at": 1704067200
        }))
        .unwrap();
        assert_eq!(user_line(&user), "Ada 7 (ada@example.com) - Role: 1 - Created At: 1704067200");
    }

    #[test]
    fn test_announcement_line_keeps_markup_literal() {
        let announcement: Announcement = serde_json::from_value(serde_json::json!({
            "title": "<script>x</script>",
            "content": "line\nbreak",
            "created_at": "now"
        }))
        .unwrap();
        assert_eq!(announcement_line(&announcement), "<script>x</script> - line\nbreak (Created At: now)");
    }

    #[test]
    fn test_render_list_replaces_previous_items() {
        let document = MemoryDocument::new().with_list(ids::EVENT_LIST, &["old 1", "old 2", "old 3"]);
        let count = render_list(&document, ids::EVENT_LIST, vec!["b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(count, 2);
        assert_eq!(document.list(ids::EVENT_LIST), Some(vec!["b".to_string(), "a".to_string()]));
    }
}
