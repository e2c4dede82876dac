//! Task Entity
//!
//! A to-do item with a three-state workflow, plus the create and partial
//! update payloads that travel over the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in bucket order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Next status when the badge on a card is clicked.
    pub fn next(self) -> Self {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    /// Catalog key of the human label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Status::Todo => "status.todo",
            Status::InProgress => "status.inProgress",
            Status::Done => "status.done",
        }
    }

    /// Position in [`Status::ALL`].
    pub fn index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown task status `{0}`")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A task as stored by the server and rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    /// Set on optimistic records that the server has not confirmed yet.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_pending: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status,
            is_pending: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Shallow merge: fields present in the patch win, the rest stay.
    pub fn merge(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Validation failures for create and update payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    EmptyTitle,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        Ok(())
    }

    /// Builds the stored task; a missing status means `todo`.
    pub fn into_task(self, id: impl Into<String>) -> Task {
        Task {
            id: id.into(),
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or_default(),
            is_pending: false,
        }
    }
}

/// Body of an update request. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(DraftError::EmptyTitle),
            _ => Ok(()),
        }
    }
}

impl From<TaskDraft> for TaskPatch {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Status::Todo, "todo")]
    #[case(Status::InProgress, "in-progress")]
    #[case(Status::Done, "done")]
    fn status_wire_form(#[case] status: Status, #[case] wire: &str) {
        assert_eq!(status.as_str(), wire);
        assert_eq!(wire.parse::<Status>(), Ok(status));
        assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{wire}\""));
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!("pending".parse::<Status>(), Err(ParseStatusError("pending".into())));
        let decoded = serde_json::from_str::<Task>(r#"{"id":"1","title":"A","status":"completed"}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn status_cycle_wraps() {
        assert_eq!(Status::Todo.next(), Status::InProgress);
        assert_eq!(Status::InProgress.next(), Status::Done);
        assert_eq!(Status::Done.next(), Status::Todo);
    }

    #[test]
    fn pending_flag_is_omitted_when_false() {
        let task = Task::new("1", "A", Status::Todo);
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("isPending").is_none());

        let pending = Task { is_pending: true, ..task };
        let json = serde_json::to_value(&pending).unwrap();
        assert_eq!(json["isPending"], true);
    }

    #[test]
    fn draft_defaults_to_todo() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        let task = draft.into_task("42");
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.description, "");
        assert_eq!(task.id, "42");
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Ship it", true)]
    fn draft_requires_title(#[case] title: &str, #[case] ok: bool) {
        assert_eq!(TaskDraft::new(title).validate().is_ok(), ok);
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let mut task = Task::new("1", "A", Status::Todo).with_description("keep me");
        task.merge(&TaskPatch::status(Status::Done));
        assert_eq!(task.title, "A");
        assert_eq!(task.description, "keep me");
        assert_eq!(task.status, Status::Done);
    }

    #[test]
    fn patch_ignores_id_and_pending_fields() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"id":"other","isPending":true,"title":"B"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("B"));
        assert!(patch.status.is_none());
        assert_eq!(patch.validate(), Ok(()));
    }
}
