//! Task Card Component
//!
//! One task: title, description, status badge, edit and delete.
//! Cards for tasks the server has not created yet are read-only.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};
use taskboard_core::reconcile::is_temp_id;

use crate::components::{DeleteConfirmButton, FormMode};
use crate::context::use_tasks;
use crate::models::{Intent, Status, Task, TaskPatch};
use crate::store::use_i18n;

/// `<For>` key covering every rendered field, so edits re-render the card.
pub fn card_key(task: &Task) -> (String, String, String, Status, bool) {
    (
        task.id.clone(),
        task.title.clone(),
        task.description.clone(),
        task.status,
        task.is_pending,
    )
}

fn badge_class(status: Status) -> &'static str {
    match status {
        Status::Todo => "status-badge todo",
        Status::InProgress => "status-badge in-progress",
        Status::Done => "status-badge done",
    }
}

#[component]
pub fn TaskCard(
    task: Task,
    form_mode: RwSignal<Option<FormMode>>,
    /// Set when the card sits in a status lane and can be dragged
    #[prop(optional)]
    dnd: Option<DndSignals>,
) -> impl IntoView {
    let ctx = use_tasks();
    let tr = use_i18n();

    let id = task.id.clone();
    let status = task.status;
    let locked = is_temp_id(&task.id);
    let pending = task.is_pending;

    let cycle_status = {
        let id = id.clone();
        move |_| {
            if dnd.is_some_and(|dnd| dnd.just_ended()) {
                return;
            }
            ctx.dispatch(Intent::update(id.clone(), TaskPatch::status(status.next())));
        }
    };
    let on_delete = {
        let id = id.clone();
        Callback::new(move |_| ctx.dispatch(Intent::delete(id.clone())))
    };
    let on_edit = {
        let task = task.clone();
        move |_| form_mode.set(Some(FormMode::Edit(task.clone())))
    };

    let drag_id = id.clone();
    let is_dragging = move || dnd.is_some_and(|dnd| dnd.is_dragging(&drag_id));
    let on_mousedown = dnd
        .filter(|_| !locked)
        .map(|dnd| make_on_mousedown(dnd, id.clone()));

    view! {
        <article
            class=move || {
                let mut class = String::from("task-card");
                if pending { class.push_str(" pending"); }
                if is_dragging() { class.push_str(" dragging"); }
                class
            }
            aria-busy=pending.to_string()
            on:mousedown=move |ev| {
                if let Some(handler) = &on_mousedown {
                    handler(ev);
                }
            }
        >
            <header class="task-card-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <button
                    class=badge_class(status)
                    disabled=locked
                    on:click=cycle_status
                >
                    {move || tr(status.label_key())}
                </button>
            </header>
            {(!task.description.is_empty()).then(|| view! {
                <p class="task-description">{task.description.clone()}</p>
            })}
            <footer class="task-card-actions">
                <button class="edit-btn" disabled=locked on:click=on_edit>
                    {move || tr("form.editTitle")}
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete disabled=locked />
            </footer>
        </article>
    }
}
