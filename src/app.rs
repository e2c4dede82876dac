//! Taskboard Frontend App
//!
//! Shows the login page or the dashboard depending on the stored token.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Dashboard, LoginForm};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restore());
    provide_context(store);

    view! {
        <Show
            when=move || store.token().with(Option::is_some)
            fallback=|| view! { <LoginForm /> }
        >
            <Dashboard />
        </Show>
    }
}
