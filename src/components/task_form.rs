//! Task Form Component
//!
//! Modal for creating or editing a task. Submitting closes it right away;
//! the change shows up optimistically.

use leptos::prelude::*;

use crate::context::use_tasks;
use crate::models::{Intent, Status, Task, TaskDraft, TaskPatch};
use crate::store::use_i18n;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    New,
    Edit(Task),
}

#[component]
pub fn TaskForm(mode: RwSignal<Option<FormMode>>) -> impl IntoView {
    move || {
        mode.get()
            .map(|current| view! { <TaskFormDialog current=current on_close=move |_| mode.set(None) /> })
    }
}

#[component]
fn TaskFormDialog(current: FormMode, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_tasks();
    let tr = use_i18n();

    let (editing, initial) = match &current {
        FormMode::New => (None, TaskDraft::new("")),
        FormMode::Edit(task) => (
            Some(task.id.clone()),
            TaskDraft {
                title: task.title.clone(),
                description: task.description.clone(),
                status: Some(task.status),
            },
        ),
    };
    let heading = if editing.is_some() { "form.editTitle" } else { "form.newTitle" };

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (status, set_status) = signal(initial.status.unwrap_or_default());
    let (title_error, set_title_error) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            status: Some(status.get_untracked()),
        };
        if draft.validate().is_err() {
            set_title_error.set(true);
            return;
        }
        let intent = match &editing {
            Some(id) => Intent::update(id.clone(), TaskPatch::from(draft)),
            None => Intent::Add(draft),
        };
        ctx.dispatch(intent);
        on_close.run(());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <h2>{move || tr(heading)}</h2>
                <form class="task-form" on:submit=on_submit>
                    <label>
                        <span>{move || tr("form.title")}</span>
                        <input
                            type="text"
                            placeholder=move || tr("form.titlePlaceholder")
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                set_title.set(event_target_value(&ev));
                                set_title_error.set(false);
                            }
                        />
                    </label>
                    <Show when=move || title_error.get()>
                        <p class="form-error" role="alert">{move || tr("form.titleRequired")}</p>
                    </Show>

                    <label>
                        <span>{move || tr("form.description")}</span>
                        <textarea
                            rows="4"
                            placeholder=move || tr("form.descriptionPlaceholder")
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label>
                        <span>{move || tr("form.status")}</span>
                        <select
                            prop:value=move || status.get().as_str()
                            on:change=move |ev| {
                                if let Ok(parsed) = event_target_value(&ev).parse::<Status>() {
                                    set_status.set(parsed);
                                }
                            }
                        >
                            {Status::ALL.into_iter().map(|option| view! {
                                <option value=option.as_str()>{move || tr(option.label_key())}</option>
                            }).collect_view()}
                        </select>
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                            {move || tr("form.cancel")}
                        </button>
                        <button type="submit" class="primary-btn">{move || tr("form.save")}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
