//! Mutation Intents
//!
//! A user action against the task list that the server has not confirmed yet.
//! Wire form: `{"kind": "add" | "update" | "delete", "task": {...}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::task::{TaskDraft, TaskPatch};

/// An unconfirmed mutation, folded over the base list by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIntent", into = "RawIntent")]
pub enum Intent {
    Add(TaskDraft),
    Update { id: String, patch: TaskPatch },
    Delete { id: String },
    /// Any other `kind`; folds as a no-op.
    Unknown(String),
}

impl Intent {
    pub fn update(id: impl Into<String>, patch: TaskPatch) -> Self {
        Intent::Update { id: id.into(), patch }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Intent::Delete { id: id.into() }
    }

    pub fn kind(&self) -> &str {
        match self {
            Intent::Add(_) => "add",
            Intent::Update { .. } => "update",
            Intent::Delete { .. } => "delete",
            Intent::Unknown(kind) => kind,
        }
    }

    /// Id an update or delete is aimed at.
    pub fn target(&self) -> Option<&str> {
        match self {
            Intent::Update { id, .. } | Intent::Delete { id } => Some(id),
            Intent::Add(_) | Intent::Unknown(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawIntent {
    kind: String,
    #[serde(default)]
    task: Value,
}

#[derive(Serialize, Deserialize)]
struct UpdateBody {
    id: String,
    #[serde(flatten)]
    patch: TaskPatch,
}

#[derive(Serialize, Deserialize)]
struct DeleteBody {
    id: String,
}

impl TryFrom<RawIntent> for Intent {
    type Error = serde_json::Error;

    fn try_from(raw: RawIntent) -> Result<Self, Self::Error> {
        Ok(match raw.kind.as_str() {
            "add" => Intent::Add(serde_json::from_value(raw.task)?),
            "update" => {
                let body: UpdateBody = serde_json::from_value(raw.task)?;
                Intent::Update { id: body.id, patch: body.patch }
            }
            "delete" => {
                let body: DeleteBody = serde_json::from_value(raw.task)?;
                Intent::Delete { id: body.id }
            }
            _ => Intent::Unknown(raw.kind),
        })
    }
}

impl From<Intent> for RawIntent {
    fn from(intent: Intent) -> Self {
        let kind = intent.kind().to_string();
        let task = match intent {
            Intent::Add(draft) => serde_json::to_value(draft),
            Intent::Update { id, patch } => serde_json::to_value(UpdateBody { id, patch }),
            Intent::Delete { id } => serde_json::to_value(DeleteBody { id }),
            Intent::Unknown(_) => Ok(Value::Null),
        };
        RawIntent {
            kind,
            task: task.unwrap_or(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;
    use serde_json::json;

    #[test]
    fn decodes_update_with_flattened_fields() {
        let intent: Intent =
            serde_json::from_value(json!({"kind": "update", "task": {"id": "7", "status": "done"}}))
                .unwrap();
        assert_eq!(intent, Intent::update("7", TaskPatch::status(Status::Done)));
        assert_eq!(intent.target(), Some("7"));
    }

    #[test]
    fn unknown_kind_decodes_to_unknown() {
        let intent: Intent =
            serde_json::from_value(json!({"kind": "archive", "task": {"id": "7"}})).unwrap();
        assert_eq!(intent, Intent::Unknown("archive".into()));
        assert_eq!(intent.target(), None);
    }

    #[test]
    fn delete_encodes_with_kind_tag() {
        let value = serde_json::to_value(Intent::delete("3")).unwrap();
        assert_eq!(value, json!({"kind": "delete", "task": {"id": "3"}}));
    }
}
