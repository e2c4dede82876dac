use leptos::prelude::*;

use crate::models::Locale;
use crate::store::{store_set_locale, use_app_store, use_i18n, AppStateStoreFields};

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let store = use_app_store();
    let tr = use_i18n();

    view! {
        <label class="language-toggle">
            <span class="sr-only">{move || tr("dashboard.language")}</span>
            <select
                prop:value=move || store.locale().get().tag()
                on:change=move |ev| {
                    if let Ok(locale) = event_target_value(&ev).parse::<Locale>() {
                        store_set_locale(&store, locale);
                    }
                }
            >
                {Locale::ALL.into_iter().map(|locale| view! {
                    <option value=locale.tag()>{locale.native_name()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}
