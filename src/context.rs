//! Task Context
//!
//! Optimistic task state shared by the dashboard components. Every
//! mutation goes through [`TaskContext::dispatch`]: it shows up at once,
//! then settles when the server answers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::OptimisticTasks;

use crate::commands::{self, ClientError};
use crate::models::{Intent, Task};

#[derive(Clone, Copy)]
pub struct TaskContext {
    pub tasks: RwSignal<OptimisticTasks>,
    /// Bumped to request a fresh snapshot; also tags each fetch.
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl TaskContext {
    pub fn new() -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            tasks: RwSignal::new(OptimisticTasks::new()),
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.try_update(|v| *v += 1);
    }

    /// False once a newer reload was requested or the dashboard is gone.
    fn is_current(&self, generation: u32) -> bool {
        self.reload_trigger.try_get_untracked() == Some(generation)
    }

    /// Fetches the base list. A reply that arrives after a newer reload
    /// was requested is dropped.
    pub fn fetch(&self, generation: u32) {
        let ctx = *self;
        ctx.tasks.update(|tasks| tasks.begin_fetch());
        spawn_local(async move {
            let result = commands::list_tasks().await;
            if !ctx.is_current(generation) {
                return;
            }
            match result {
                Ok(base) => {
                    web_sys::console::log_1(&format!("[TASKS] loaded {} tasks", base.len()).into());
                    ctx.tasks.try_update(|tasks| tasks.resolve(base));
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[TASKS] load failed: {error}").into());
                    ctx.tasks.try_update(|tasks| tasks.fail_fetch(error.message_key()));
                }
            }
        });
    }

    /// Applies `intent` optimistically and sends it. On failure the
    /// intent is rolled back and its error stays until dismissed.
    pub fn dispatch(&self, intent: Intent) {
        let Some(ticket) = self.tasks.try_update(|tasks| tasks.submit(intent.clone())) else {
            return;
        };
        web_sys::console::log_1(&format!("[TASKS] {} {:?}", intent.kind(), intent.target()).into());

        let ctx = *self;
        spawn_local(async move {
            match send(&intent).await {
                Ok(()) => {
                    ctx.tasks.try_update(|tasks| {
                        tasks.confirm(ticket);
                    });
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[TASKS] {} failed: {error}", intent.kind()).into());
                    ctx.tasks.try_update(|tasks| {
                        tasks.reject(ticket, error.message_key());
                    });
                }
            }
            ctx.reload();
        });
    }

    pub fn dismiss_error(&self) {
        self.tasks.update(|tasks| tasks.dismiss_error());
    }

    /// Reconciled list as it should be rendered now.
    pub fn view(&self) -> Vec<Task> {
        self.tasks.with(|tasks| tasks.view())
    }
}

async fn send(intent: &Intent) -> Result<(), ClientError> {
    match intent {
        Intent::Add(draft) => commands::create_task(draft).await.map(|_| ()),
        Intent::Update { id, patch } => commands::update_task(id, patch).await.map(|_| ()),
        Intent::Delete { id } => commands::delete_task(id).await,
        Intent::Unknown(_) => Ok(()),
    }
}

pub fn use_tasks() -> TaskContext {
    expect_context::<TaskContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_generations_are_not_current() {
        let owner = Owner::new();
        let ctx = owner.with(TaskContext::new);
        assert!(ctx.is_current(0));

        ctx.reload();
        assert!(!ctx.is_current(0));
        assert!(ctx.is_current(1));
    }

    #[test]
    fn replies_after_unmount_are_ignored() {
        let owner = Owner::new();
        let ctx = owner.with(TaskContext::new);
        owner.cleanup();
        drop(owner);

        assert!(!ctx.is_current(0));
        ctx.reload();
        assert!(ctx.tasks.try_update(|tasks| tasks.resolve(Vec::new())).is_none());
    }
}
