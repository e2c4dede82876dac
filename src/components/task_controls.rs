//! Filter and group selectors.

use leptos::prelude::*;

use crate::models::{Filter, GroupMode};
use crate::store::{use_app_store, use_i18n, AppStateStoreFields};

#[component]
pub fn TaskControls() -> impl IntoView {
    let store = use_app_store();
    let tr = use_i18n();

    view! {
        <div class="task-controls">
            <label>
                <span>{move || tr("filter.label")}</span>
                <select
                    prop:value=move || store.filter().get().to_string()
                    on:change=move |ev| {
                        if let Ok(filter) = event_target_value(&ev).parse::<Filter>() {
                            store.filter().set(filter);
                        }
                    }
                >
                    {Filter::OPTIONS.into_iter().map(|option| view! {
                        <option value=option.to_string()>{move || tr(option.label_key())}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                <span>{move || tr("group.label")}</span>
                <select
                    prop:value=move || store.group_mode().get().as_str()
                    on:change=move |ev| {
                        if let Ok(mode) = event_target_value(&ev).parse::<GroupMode>() {
                            store.group_mode().set(mode);
                        }
                    }
                >
                    {GroupMode::OPTIONS.into_iter().map(|option| view! {
                        <option value=option.as_str()>{move || tr(option.label_key())}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
