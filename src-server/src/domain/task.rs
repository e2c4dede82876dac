//! Task Entity
//!
//! Server-side view of the shared task model.

use uuid::Uuid;

pub use taskboard_core::task::{Status, Task, TaskDraft, TaskPatch};

use super::entity::{Entity, Patchable};

impl Entity for Task {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Patchable for Task {
    type Patch = TaskPatch;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        self.merge(patch);
    }
}

/// Server-assigned id. Never collides with the UI's `temp-` placeholders.
pub fn new_task_id() -> String {
    Uuid::new_v4().to_string()
}
