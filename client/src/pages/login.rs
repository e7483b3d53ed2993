//! Login page: email + password sign-in against `POST /login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::credential_form::AuthCard;
use crate::state::form::AuthMode;
use crate::state::session::Session;
use crate::util::guard::{AppRoute, install_route_guard};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_route_guard(AppRoute::Login, session, use_navigate());

    view! { <AuthCard mode=AuthMode::Login/> }
}
