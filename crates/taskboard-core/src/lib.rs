//! Taskboard Core
//!
//! Types and pure logic shared by the server and the browser UI:
//! - task: Task entity, status workflow, create/update payloads
//! - intent: unconfirmed mutations
//! - reconcile: folds intents over the base list
//! - optimistic: base snapshot + intent log with confirm/rollback
//! - projection: filter and group-by-status view
//! - i18n: locale tables

pub mod i18n;
pub mod intent;
pub mod optimistic;
pub mod projection;
pub mod reconcile;
pub mod task;

pub use i18n::{current_locale, set_current_locale, t, translate, Locale};
pub use intent::Intent;
pub use optimistic::{OptimisticTasks, Phase, Ticket};
pub use projection::{project, Filter, GroupMode, StatusGroups, TaskView};
pub use reconcile::{reconcile, ClockTempIds, SequentialTempIds, TempIdSource};
pub use task::{DraftError, Status, Task, TaskDraft, TaskPatch};
