//! `/`: sends the user to the dashboard or the login form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{AppRoute, install_route_guard};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_route_guard(AppRoute::Root, session, use_navigate());

    view! { <p class="muted">"Carregando..."</p> }
}
