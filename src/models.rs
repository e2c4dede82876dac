//! Frontend Models
//!
//! Task types come from `taskboard-core`, shared with the server.

use serde::{Deserialize, Serialize};

pub use taskboard_core::{Filter, GroupMode, Intent, Locale, Status, Task, TaskDraft, TaskPatch, TaskView};

/// Signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Login response (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
