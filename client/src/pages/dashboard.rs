//! Dashboard page listing monitored posts with an add-post form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. The post list is requested once the session
//! is confirmed; a 401 from any call ends the session and the guard sends the
//! user back to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::config::ApiConfig;
use crate::net::api;
use crate::state::posts::PostsState;
use crate::state::session::{Session, SessionPhase};
use crate::util::guard::{AppRoute, install_route_guard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    install_route_guard(AppRoute::Dashboard, session, use_navigate());

    let reload = RwSignal::new(0_u32);
    let posts = RwSignal::new(PostsState::default());

    Effect::new(move || {
        reload.track();
        if session.phase() != SessionPhase::Authenticated {
            return;
        }
        if posts.with_untracked(|p| p.loaded) {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let mut started = false;
        posts.update(|p| started = p.begin_load());
        if !started {
            return;
        }
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::list_posts(&config, &token).await;
            session.end_if_unauthorized(&result);
            posts.update(|p| p.finish_load(result));
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        let mut url = None;
        posts.update(|p| url = p.begin_add());
        let Some(url) = url else {
            return;
        };
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::add_post(&config, &token, &url).await;
            session.end_if_unauthorized(&result);
            posts.update(|p| p.finish_add(result));
        });
    };

    view! {
        <Show
            when=move || session.phase() == SessionPhase::Authenticated
            fallback=move || {
                view! {
                    <p class="muted">
                        {move || {
                            if session.phase() == SessionPhase::Restoring {
                                "Carregando..."
                            } else {
                                "Redirecionando para o login..."
                            }
                        }}
                    </p>
                }
            }
        >
            <NavBar active=AppRoute::Dashboard/>
            <section class="panel">
                <h2 class="panel__title">"Posts monitorados"</h2>
                {move || {
                    posts.with(|p| p.error.clone())
                        .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
                }}
                <Show when=move || posts.with(PostsState::can_retry_load)>
                    <button class="form-button" type="button" on:click=move |_| reload.update(|n| *n += 1)>
                        "Tentar novamente"
                    </button>
                </Show>
                <Show
                    when=move || !posts.with(|p| p.loading)
                    fallback=|| view! { <p class="muted">"Carregando posts..."</p> }
                >
                    <Show
                        when=move || posts.with(|p| !p.items.is_empty())
                        fallback=|| view! { <p class="muted">"Nenhum post monitorado."</p> }
                    >
                        <ul class="post-list">
                            {move || {
                                posts
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|url| {
                                        let href = url.clone();
                                        view! {
                                            <li class="post-list__item">
                                                <a href=href target="_blank" rel="noopener noreferrer">{url}</a>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
                <form class="post-form" on:submit=on_add>
                    <input
                        class="form-input"
                        type="url"
                        placeholder="https://www.facebook.com/{página}/posts/{id}/"
                        required=true
                        prop:value=move || posts.with(|p| p.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            posts.update(|p| p.draft = value);
                        }
                    />
                    <button class="form-button" type="submit" disabled=move || posts.with(|p| p.adding)>
                        {move || if posts.with(|p| p.adding) { "Adicionando..." } else { "Monitorar post" }}
                    </button>
                </form>
            </section>
        </Show>
    }
}
