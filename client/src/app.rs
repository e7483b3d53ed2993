//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_URL_META_NAME, ApiConfig};
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage, webhook::WebhookPage,
};
use crate::state::session::{Session, SessionStore};
use crate::theme::THEME;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided as context for the server render and echoed into a
/// `<meta>` tag so the hydrated client picks up the same endpoint.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    let api_url = config.base_url().to_owned();
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META_NAME content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and API config contexts and sets up client-side
/// routing. The session starts in the restoring phase and reads browser
/// storage once hydrated, so server and client render the same first frame.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ApiConfig>().is_none() {
        provide_context(ApiConfig::default());
    }

    let session = Session::new(SessionStore::for_target());
    provide_context(session);

    // Effects only run in the browser.
    Effect::new(move |_| session.restore());

    view! {
        <Title text="Post Monitor"/>
        <Meta name="description" content="Monitoramento de posts do Facebook"/>
        <Style id="theme">{THEME.stylesheet()}</Style>

        <Router>
            <main>
                <Routes fallback=|| view! { <p class="muted">"Página não encontrada."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("webhook") view=WebhookPage/>
                </Routes>
            </main>
        </Router>
    }
}
