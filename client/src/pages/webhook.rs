//! Webhook page: shows and updates the notification URL the API calls when a
//! monitored post goes inactive.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::config::ApiConfig;
use crate::net::api;
use crate::state::session::{Session, SessionPhase};
use crate::state::webhook::WebhookState;
use crate::util::guard::{AppRoute, install_route_guard};

#[component]
pub fn WebhookPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    install_route_guard(AppRoute::Webhook, session, use_navigate());

    let reload = RwSignal::new(0_u32);
    let webhook = RwSignal::new(WebhookState::default());

    Effect::new(move || {
        reload.track();
        if session.phase() != SessionPhase::Authenticated {
            return;
        }
        if webhook.with_untracked(|w| w.loaded) {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let mut started = false;
        webhook.update(|w| started = w.begin_load());
        if !started {
            return;
        }
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::fetch_webhook(&config, &token).await;
            session.end_if_unauthorized(&result);
            webhook.update(|w| w.finish_load(result));
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let mut url = None;
        webhook.update(|w| url = w.begin_save());
        let Some(url) = url else {
            return;
        };
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::set_webhook(&config, &token, &url).await;
            session.end_if_unauthorized(&result);
            webhook.update(|w| w.finish_save(result));
        });
    };

    let current_label = move || {
        webhook.with(|w| match (&w.current, w.loaded) {
            (Some(url), _) => url.clone(),
            (None, true) => "Webhook não configurado".to_owned(),
            (None, false) => "Carregando...".to_owned(),
        })
    };

    view! {
        <Show
            when=move || session.phase() == SessionPhase::Authenticated
            fallback=|| view! { <p class="muted">"Carregando..."</p> }
        >
            <NavBar active=AppRoute::Webhook/>
            <section class="panel">
                <h2 class="panel__title">"Webhook"</h2>
                <p class="muted">{current_label}</p>
                {move || {
                    webhook.with(|w| w.error.clone())
                        .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
                }}
                <Show when=move || webhook.with(WebhookState::can_retry_load)>
                    <button class="form-button" type="button" on:click=move |_| reload.update(|n| *n += 1)>
                        "Tentar novamente"
                    </button>
                </Show>
                <Show when=move || webhook.with(|w| w.saved)>
                    <div class="form-success">"Webhook salvo."</div>
                </Show>
                <form class="webhook-form" on:submit=on_save>
                    <input
                        class="form-input"
                        type="url"
                        placeholder="https://example.com/hook"
                        required=true
                        prop:value=move || webhook.with(|w| w.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            webhook.update(|w| w.draft = value);
                        }
                    />
                    <button class="form-button" type="submit" disabled=move || webhook.with(|w| w.saving)>
                        {move || if webhook.with(|w| w.saving) { "Salvando..." } else { "Salvar webhook" }}
                    </button>
                </form>
            </section>
        </Show>
    }
}
