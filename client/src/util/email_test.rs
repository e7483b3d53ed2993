use super::*;

#[test]
fn accepts_common_addresses() {
    assert!(looks_like_email("a@b.com"));
    assert!(looks_like_email("first.last+tag@mail.example.org"));
}

#[test]
fn accepts_dotless_domain_like_browsers_do() {
    assert!(looks_like_email("admin@localhost"));
}

#[test]
fn rejects_missing_at_or_parts() {
    assert!(!looks_like_email("not-an-email"));
    assert!(!looks_like_email("@b.com"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email(""));
}

#[test]
fn rejects_second_at_and_spaces() {
    assert!(!looks_like_email("a@b@c.com"));
    assert!(!looks_like_email("a b@c.com"));
}

#[test]
fn rejects_bad_domain_labels() {
    assert!(!looks_like_email("a@b..com"));
    assert!(!looks_like_email("a@-b.com"));
    assert!(!looks_like_email("a@b-.com"));
    assert!(!looks_like_email("a@b.com."));
}
