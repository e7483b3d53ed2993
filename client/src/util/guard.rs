//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the same guard so redirects follow one rule set:
//! protected views need a session, auth forms bounce signed-in users to the
//! dashboard, and nothing redirects while the session is still restoring.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Dashboard,
    Webhook,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Root, Self::Login, Self::Register, Self::Dashboard, Self::Webhook];

    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Webhook => "/webhook",
        }
    }

    /// Route for an exact path; a single trailing `/` is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard | Self::Webhook)
    }
}

/// Where `route` should send the user in `phase`, or `None` to render it.
pub fn redirect_for(route: AppRoute, phase: SessionPhase) -> Option<AppRoute> {
    match (route, phase) {
        (_, SessionPhase::Restoring) => None,
        (AppRoute::Root | AppRoute::Login | AppRoute::Register, SessionPhase::Authenticated) => {
            Some(AppRoute::Dashboard)
        }
        (AppRoute::Root, SessionPhase::Unauthenticated) => Some(AppRoute::Login),
        (r, SessionPhase::Unauthenticated) if r.requires_session() => Some(AppRoute::Login),
        _ => None,
    }
}

/// Redirect away from `route` whenever the session phase calls for it.
pub fn install_route_guard<F>(route: AppRoute, session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_for(route, session.phase()) {
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
