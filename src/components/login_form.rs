//! Login Form Component
//!
//! Posts credentials and stores the returned token. The server also sets
//! a session cookie.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, ClientError};
use crate::components::LanguageToggle;
use crate::store::{store_sign_in, use_app_store, use_i18n};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let tr = use_i18n();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_key, set_error_key) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error_key.set(None);

        spawn_local(async move {
            let result = commands::login(&email.get_untracked(), &password.get_untracked()).await;
            set_submitting.set(false);
            match result {
                Ok(session) => {
                    web_sys::console::log_1(&format!("[AUTH] signed in as {}", session.user.email).into());
                    set_password.set(String::new());
                    store_sign_in(&store, session.token);
                }
                Err(ClientError::Unauthorized) => set_error_key.set(Some("login.invalidCredentials")),
                Err(error) => {
                    web_sys::console::error_1(&format!("[AUTH] login failed: {error}").into());
                    set_error_key.set(Some(error.message_key()));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>{move || tr("login.title")}</h1>
                    <LanguageToggle />
                </div>
                <p class="login-subtitle">{move || tr("login.subtitle")}</p>

                <form class="login-form" on:submit=on_submit>
                    <label>
                        <span>{move || tr("login.email")}</span>
                        <input
                            type="email"
                            required
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        <span>{move || tr("login.password")}</span>
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error_key.get().map(|key| view! {
                        <p class="form-error" role="alert">{tr(key)}</p>
                    })}

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { tr("login.submitting") } else { tr("login.submit") }}
                    </button>
                </form>
            </div>
        </div>
    }
}
