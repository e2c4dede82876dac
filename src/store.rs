//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Locale and the
//! session token survive reloads through `localStorage`.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_core::{set_current_locale, t};

use crate::models::{Filter, GroupMode, Locale};

const LOCALE_KEY: &str = "language-storage";
const TOKEN_KEY: &str = "token";

/// View settings and session, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub filter: Filter,
    pub group_mode: GroupMode,
    pub locale: Locale,
    /// Present while signed in
    pub token: Option<String>,
}

impl AppState {
    /// Restores persisted locale and token.
    pub fn restore() -> Self {
        let locale = read_storage(LOCALE_KEY)
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_default();
        set_current_locale(locale);
        Self {
            locale,
            token: read_storage(TOKEN_KEY).filter(|token| !token.is_empty()),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Reactive translator. The store's locale field is tracked so text
/// re-renders on a switch; the lookup itself uses the process-wide locale,
/// which `store_set_locale` updates first.
pub fn use_i18n() -> impl Fn(&str) -> String + Copy + 'static {
    let store = use_app_store();
    move |key: &str| {
        let _ = store.locale().get();
        t(key).to_string()
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_locale(store: &AppStore, locale: Locale) {
    set_current_locale(locale);
    write_storage(LOCALE_KEY, Some(locale.tag()));
    store.locale().set(locale);
}

pub fn store_sign_in(store: &AppStore, token: String) {
    write_storage(TOKEN_KEY, Some(&token));
    store.token().set(Some(token));
}

pub fn store_sign_out(store: &AppStore) {
    write_storage(TOKEN_KEY, None);
    store.token().set(None);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write_storage(key: &str, value: Option<&str>) {
    let Some(storage) = local_storage() else {
        web_sys::console::warn_1(&"[STORE] localStorage unavailable".into());
        return;
    };
    let result = match value {
        Some(value) => storage.set_item(key, value),
        None => storage.remove_item(key),
    };
    if result.is_err() {
        web_sys::console::warn_1(&format!("[STORE] could not persist `{key}`").into());
    }
}
