//! Status Lanes Component
//!
//! Grouped view: one lane per status. Dropping a card on another lane
//! moves it to that status. Empty lanes are hidden unless a drag is in
//! progress, so there is always somewhere to drop.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_lane_mouseenter, make_on_mouseleave,
    DropTarget,
};

use crate::components::{card_key, FormMode, TaskCard};
use crate::context::use_tasks;
use crate::models::{Intent, Status, TaskPatch, TaskView};
use crate::store::use_i18n;

#[component]
pub fn StatusLanes(
    #[prop(into)] view: Signal<TaskView>,
    form_mode: RwSignal<Option<FormMode>>,
) -> impl IntoView {
    let ctx = use_tasks();
    let tr = use_i18n();
    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |dragged, target| {
        let DropTarget::Lane(index) = target;
        let Some(status) = Status::ALL.get(index).copied() else {
            return;
        };
        let current = ctx
            .view()
            .into_iter()
            .find(|task| task.id == dragged)
            .map(|task| task.status);
        if current.is_some_and(|current| current != status) {
            ctx.dispatch(Intent::update(dragged, TaskPatch::status(status)));
        }
    });

    let lane_tasks = move |status: Status| match view.get() {
        TaskView::Grouped(groups) => groups.get(status).to_vec(),
        TaskView::Flat(tasks) => tasks.into_iter().filter(|task| task.status == status).collect(),
    };

    view! {
        <div class="status-lanes">
            {Status::ALL.into_iter().map(|status| {
                let index = status.index();
                let visible = move || {
                    dnd.dragging_id_read.with(Option::is_some) || !lane_tasks(status).is_empty()
                };
                view! {
                    <Show when=visible>
                        <section
                            class=move || if dnd.is_target(DropTarget::Lane(index)) { "status-lane drop-target" } else { "status-lane" }
                            on:mouseenter=make_on_lane_mouseenter(dnd, index)
                            on:mouseleave=make_on_mouseleave(dnd)
                        >
                            <h2 class="lane-title">
                                {move || tr(status.label_key())}
                                <span class="lane-count">{move || lane_tasks(status).len()}</span>
                            </h2>
                            <div class="lane-cards">
                                <For
                                    each=move || lane_tasks(status)
                                    key=card_key
                                    children=move |task| view! {
                                        <TaskCard task=task form_mode=form_mode dnd=dnd />
                                    }
                                />
                            </div>
                        </section>
                    </Show>
                }
            }).collect_view()}
        </div>
    }
}
