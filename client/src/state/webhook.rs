//! Webhook configuration state for the webhook page.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use url::Url;

use crate::net::error::ApiError;

pub const LOAD_FALLBACK: &str = "Erro ao carregar webhook";
pub const SAVE_FALLBACK: &str = "Erro ao salvar webhook";
pub const INVALID_URL_MESSAGE: &str = "Informe uma URL http(s) válida.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WebhookState {
    /// `None` when loaded and not configured.
    pub current: Option<String>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub draft: String,
    pub saving: bool,
    pub saved: bool,
}

impl WebhookState {
    /// The last load failed and nothing is loaded yet.
    pub fn can_retry_load(&self) -> bool {
        !self.loaded && !self.loading && self.error.is_some()
    }

    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish_load(&mut self, result: Result<Option<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(current) => {
                if self.draft.is_empty() {
                    self.draft = current.clone().unwrap_or_default();
                }
                self.current = current;
                self.loaded = true;
            }
            Err(e) => self.error = Some(e.user_message(LOAD_FALLBACK)),
        }
    }

    /// Start saving the drafted URL. Returns the URL to send.
    pub fn begin_save(&mut self) -> Option<String> {
        if self.saving {
            return None;
        }
        self.saved = false;
        let url = self.draft.trim();
        if !is_http_url(url) {
            self.error = Some(INVALID_URL_MESSAGE.to_owned());
            return None;
        }
        let url = url.to_owned();
        self.saving = true;
        self.error = None;
        Some(url)
    }

    pub fn finish_save(&mut self, result: Result<String, ApiError>) {
        self.saving = false;
        match result {
            Ok(url) => {
                self.draft.clone_from(&url);
                self.current = Some(url);
                self.saved = true;
            }
            Err(e) => self.error = Some(e.user_message(SAVE_FALLBACK)),
        }
    }
}

/// The API stores webhooks as absolute `http`/`https` URLs.
fn is_http_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}
