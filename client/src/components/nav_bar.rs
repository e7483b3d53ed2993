//! Top navigation for authenticated views.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::guard::AppRoute;

#[component]
pub fn NavBar(active: AppRoute) -> impl IntoView {
    let session = expect_context::<Session>();
    // Clearing the session is enough: the page guard redirects to /login.
    let on_logout = move |_| session.sign_out();

    let link = move |route: AppRoute, label: &'static str| {
        view! {
            <a class="nav-bar__link" class:nav-bar__link--active={route == active} href=route.path()>
                {label}
            </a>
        }
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Post Monitor"</span>
            {link(AppRoute::Dashboard, "Posts")}
            {link(AppRoute::Webhook, "Webhook")}
            <span class="nav-bar__spacer"></span>
            <button class="nav-bar__logout" on:click=on_logout title="Sair">
                "Sair"
            </button>
        </header>
    }
}
