//! Card with the email/password form used by login and register.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the form only writes the session; the page's route guard sees
//! the authenticated phase and navigates to `/dashboard`.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api;
use crate::state::form::{AuthMode, FormState};
use crate::state::session::Session;
use crate::util::guard::AppRoute;

/// Centered card: title, credential form, and a link to the other auth page.
#[component]
pub fn AuthCard(mode: AuthMode) -> impl IntoView {
    let (prompt, link_label, link_route) = match mode {
        AuthMode::Login => ("Não tem conta? ", "Cadastre-se", AppRoute::Register),
        AuthMode::Register => ("Já tem conta? ", "Entrar", AppRoute::Login),
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">{mode.title()}</h2>
                <CredentialForm mode=mode/>
                <div class="auth-card__footer">
                    {prompt}
                    <a href=link_route.path()>{link_label}</a>
                </div>
            </div>
        </div>
    }
}

/// Email + password form bound to one [`AuthMode`].
#[component]
pub fn CredentialForm(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<Session>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit().ok());
        let Some(credential) = started else {
            return;
        };
        let config = config.get_value();

        leptos::task::spawn_local(async move {
            let result = match mode {
                AuthMode::Login => api::login(&config, &credential).await,
                AuthMode::Register => api::register(&config, &credential).await,
            };
            form.update(|f| {
                f.complete(mode, result, &session);
            });
        });
    };

    let secret_autocomplete = match mode {
        AuthMode::Login => "current-password",
        AuthMode::Register => "new-password",
    };
    let in_flight = move || form.with(|f| f.in_flight);

    view! {
        <form class="credential-form" on:submit=on_submit>
            {move || {
                form.with(|f| f.error.clone())
                    .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
            }}
            <input
                class="form-input"
                type="email"
                placeholder="E-mail"
                autocomplete="username"
                required=true
                prop:value=move || form.with(|f| f.identifier.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.identifier = value);
                }
            />
            <input
                class="form-input"
                type="password"
                placeholder="Senha"
                autocomplete=secret_autocomplete
                required=true
                prop:value=move || form.with(|f| f.secret.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.secret = value);
                }
            />
            <button class="form-button" type="submit" disabled=in_flight>
                {move || if in_flight() { mode.pending_label() } else { mode.submit_label() }}
            </button>
        </form>
    }
}
