//! Remote API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads the base URL from its environment and renders it into the
//! HTML shell as a `<meta>` tag. The hydrated client reads it back from the
//! document, so neither side hardcodes the endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://facebook-post-monitor.onrender.com";

/// `name` attribute of the `<meta>` tag carrying the base URL.
pub const API_URL_META_NAME: &str = "postwatch-api-url";

/// Base endpoint of the remote auth/monitor API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base URL, trimming whitespace and trailing `/`.
    /// A blank value falls back to [`DEFAULT_API_URL`].
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path (`/login`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Read the base URL from the shell's `<meta>` tag.
    ///
    /// Falls back to the default outside the browser or when the tag is missing.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_URL_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content {
                Some(raw) => Self::new(&raw),
                None => {
                    leptos::logging::warn!("{API_URL_META_NAME} meta tag missing; using {DEFAULT_API_URL}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}
