//! Domain Layer
//!
//! Entities the server stores and the rules around them.
//! Task types themselves live in `taskboard-core` so the UI shares them.

mod entity;
mod task;
mod user;

pub use entity::{DomainError, DomainResult, Entity, Patchable};
pub use task::{new_task_id, Status, Task, TaskDraft, TaskPatch};
pub use user::{Credentials, DemoAccount, Session, User};
