//! Dashboard Component
//!
//! Header, controls, and the filtered task list as a flat grid or as
//! status lanes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_core::project;

use crate::commands;
use crate::components::{card_key, FormMode, LanguageToggle, StatusBar, StatusLanes, TaskCard, TaskControls, TaskForm};
use crate::context::TaskContext;
use crate::models::TaskView;
use crate::store::{store_sign_out, use_app_store, use_i18n, AppStateStoreFields};

/// Which body the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Loading,
    Empty,
    NoMatches,
    Lanes,
    Grid,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let tr = use_i18n();

    let ctx = TaskContext::new();
    provide_context(ctx);

    let form_mode = RwSignal::new(None::<FormMode>);

    // Fetch on mount and whenever a reload is requested
    Effect::new(move |_| {
        let generation = ctx.reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] loading tasks, trigger={generation}").into());
        ctx.fetch(generation);
    });

    let reconciled = Memo::new(move |_| ctx.view());
    let view = Memo::new(move |_| {
        reconciled.with(|tasks| project(tasks, store.filter().get(), store.group_mode().get()))
    });

    let body = Memo::new(move |_| {
        if ctx.tasks.with(|tasks| tasks.is_loading()) {
            Body::Loading
        } else if reconciled.with(Vec::is_empty) {
            Body::Empty
        } else if view.with(TaskView::is_empty) {
            Body::NoMatches
        } else if view.with(TaskView::is_grouped) {
            Body::Lanes
        } else {
            Body::Grid
        }
    });

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(error) = commands::logout().await {
                web_sys::console::warn_1(&format!("[AUTH] logout request failed: {error}").into());
            }
        });
        store_sign_out(&store);
    };

    let flat_tasks = move || match view.get() {
        TaskView::Flat(tasks) => tasks,
        TaskView::Grouped(_) => Vec::new(),
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{move || tr("dashboard.title")}</h1>
                    <p class="dashboard-subtitle">{move || tr("dashboard.subtitle")}</p>
                </div>
                <div class="header-actions">
                    <LanguageToggle />
                    <button class="secondary-btn" on:click=on_logout>{move || tr("dashboard.logout")}</button>
                    <button class="primary-btn" on:click=move |_| form_mode.set(Some(FormMode::New))>
                        {move || tr("dashboard.newTask")}
                    </button>
                </div>
            </header>

            <StatusBar />
            <TaskControls />

            <main class="dashboard-body">
                {move || match body.get() {
                    Body::Loading => view! { <p class="loading">{move || tr("common.loading")}</p> }.into_any(),
                    Body::Empty => view! {
                        <div class="empty-state">
                            <h2>{move || tr("dashboard.noTasks")}</h2>
                            <p>{move || tr("dashboard.getStarted")}</p>
                            <button class="primary-btn" on:click=move |_| form_mode.set(Some(FormMode::New))>
                                {move || tr("dashboard.createTask")}
                            </button>
                        </div>
                    }.into_any(),
                    Body::NoMatches => view! { <p class="no-matches">{move || tr("dashboard.noMatches")}</p> }.into_any(),
                    Body::Lanes => view! { <StatusLanes view=view form_mode=form_mode /> }.into_any(),
                    Body::Grid => view! {
                        <div class="task-grid">
                            <For
                                each=flat_tasks
                                key=card_key
                                children=move |task| view! { <TaskCard task=task form_mode=form_mode /> }
                            />
                        </div>
                    }.into_any(),
                }}
            </main>

            <TaskForm mode=form_mode />
        </div>
    }
}
