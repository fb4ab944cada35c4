//! Test data shaped like the backend's records

use serde_json::{json, Value};

pub fn ada() -> Value {
    json!({
        "id": 1,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "role": "admin",
        "is_active": true,
        "created_at": "2024-01-01T09:00:00"
    })
}

pub fn grace() -> Value {
    json!({
        "id": 2,
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "role": "user",
        "is_active": false,
        "created_at": "2024-02-02T10:30:00"
    })
}

pub fn users() -> Value {
    json!([ada(), grace()])
}

pub fn events() -> Value {
    json!([
        {
            "id": 10,
            "title": "Spring Gala",
            "description": "Annual gala",
            "start_date": "2024-05-01T19:00:00",
            "end_date": "2024-05-01T23:00:00",
            "created_by": 1,
            "created_at": "2024-03-01T08:00:00"
        },
        {
            "id": 11,
            "title": "Board Meeting",
            "description": null,
            "start_date": "2024-06-10T14:00:00",
            "end_date": "2024-06-10T15:00:00",
            "created_by": 2,
            "created_at": "2024-03-02T08:00:00"
        },
        {
            "id": 12,
            "title": "<b>Hackathon</b>",
            "description": "Bring & share",
            "start_date": "2024-07-01T09:00:00",
            "end_date": "2024-07-02T09:00:00",
            "created_by": 1,
            "created_at": "2024-03-03T08:00:00"
        }
    ])
}

pub fn announcements() -> Value {
    json!([
        {
            "id": 5,
            "title": "Welcome",
            "content": "Registration is open",
            "created_by": 1,
            "created_at": "2024-01-15T12:00:00"
        }
    ])
}

pub const ADA_LINE: &str = "Ada Lovelace (ada@example.com) - Role: admin - Created At: 2024-01-01T09:00:00";
pub const GRACE_LINE: &str = "Grace Hopper (grace@example.com) - Role: user - Created At: 2024-02-02T10:30:00";
