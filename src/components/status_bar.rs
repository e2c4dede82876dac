//! In-flight indicator and sticky error banner.

use leptos::prelude::*;

use crate::context::use_tasks;
use crate::store::use_i18n;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_tasks();
    let tr = use_i18n();

    let in_flight = move || ctx.tasks.with(|tasks| tasks.in_flight());
    let error_key = move || ctx.tasks.with(|tasks| tasks.last_error().map(str::to_string));

    view! {
        <Show when=move || { in_flight() > 0 }>
            <div class="sync-indicator" role="status">
                <span class="spinner"></span>
                {move || tr("common.validatingSession")}
                <span class="sync-count">{in_flight}</span>
            </div>
        </Show>
        {move || error_key().map(|key| view! {
            <div class="error-banner" role="alert">
                <span>{tr(&key)}</span>
                <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>
                    {move || tr("common.dismiss")}
                </button>
            </div>
        })}
    }
}
