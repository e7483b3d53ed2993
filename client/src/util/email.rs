//! Email shape check matching the browser's `<input type="email">` constraint.
//!
//! The browser blocks submission of a non-email identifier on its own; the
//! form model applies the same rule so a request is never built for one.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

const LOCAL_PUNCTUATION: &str = ".!#$%&'*+/=?^_`{|}~-";

/// `true` when `value` is a valid email address per the HTML living standard's
/// `type=email` grammar (single `@`, dot-separated alphanumeric/hyphen labels).
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || LOCAL_PUNCTUATION.contains(c))
        && !domain.is_empty()
        && domain.split('.').all(valid_label)
}

fn valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
