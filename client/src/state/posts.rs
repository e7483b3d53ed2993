//! Monitored-post list state for the dashboard.
//!
//! DESIGN
//! ======
//! Mirrors the form model: the page owns one `PostsState` signal and the
//! methods here decide what to send and how results land, so the page only
//! wires signals to API calls.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::error::ApiError;

pub const LOAD_FALLBACK: &str = "Erro ao carregar posts";
pub const ADD_FALLBACK: &str = "Erro ao adicionar post";
pub const EMPTY_URL_MESSAGE: &str = "Informe a URL do post.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostsState {
    pub items: Vec<String>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub draft: String,
    pub adding: bool,
}

impl PostsState {
    /// Mark a list load as started. Returns `false` if one is already running.
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

    pub fn finish_load(&mut self, result: Result<Vec<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
            }
            Err(e) => self.error = Some(e.user_message(LOAD_FALLBACK)),
        }
    }

    /// Start adding the drafted URL. Returns the trimmed URL to send.
    pub fn begin_add(&mut self) -> Option<String> {
        if self.adding {
            return None;
        }
        let url = self.draft.trim();
        if url.is_empty() {
            self.error = Some(EMPTY_URL_MESSAGE.to_owned());
            return None;
        }
        let url = url.to_owned();
        self.adding = true;
        self.error = None;
        Some(url)
    }

    /// Land an add result; the stored URL is appended unless already listed.
    pub fn finish_add(&mut self, result: Result<String, ApiError>) {
        self.adding = false;
        match result {
            Ok(url) => {
                if !self.items.contains(&url) {
                    self.items.push(url);
                }
                self.draft.clear();
            }
            Err(e) => self.error = Some(e.user_message(ADD_FALLBACK)),
        }
    }
}
