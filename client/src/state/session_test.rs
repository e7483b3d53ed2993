use super::*;

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_get_is_none_before_set() {
    let store = SessionStore::in_memory();
    assert_eq!(store.get(), None);
}

#[test]
fn store_set_then_get_returns_token() {
    let store = SessionStore::in_memory();
    store.set("tok123");
    assert_eq!(store.get().as_deref(), Some("tok123"));
}

#[test]
fn store_set_replaces_previous_token() {
    let store = SessionStore::in_memory();
    store.set("first");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn store_clear_removes_token() {
    let store = SessionStore::in_memory();
    store.set("tok123");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn store_treats_empty_value_as_absent() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set_item(TOKEN_KEY, "");
    let store = SessionStore::new(storage);
    assert_eq!(store.get(), None);
}

#[test]
fn store_uses_token_key() {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone());
    store.set("abc");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = SessionStore::browser();
    store.set("abc");
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_store_keeps_tokens_in_memory() {
    let store = SessionStore::for_target();
    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
}

// =============================================================
// SessionState phases
// =============================================================

#[test]
fn default_state_is_restoring() {
    assert_eq!(SessionState::default().phase(), SessionPhase::Restoring);
}

#[test]
fn restored_state_phase_follows_token_presence() {
    let anon = SessionState { token: None, restored: true };
    let authed = SessionState { token: Some("t".to_owned()), restored: true };
    assert_eq!(anon.phase(), SessionPhase::Unauthenticated);
    assert_eq!(authed.phase(), SessionPhase::Authenticated);
}

// =============================================================
// Session context
// =============================================================

#[test]
fn restore_picks_up_persisted_token() {
    let store = SessionStore::in_memory();
    store.set("persisted");
    let session = Session::new(store);
    assert_eq!(session.phase(), SessionPhase::Restoring);
    session.restore();
    assert_eq!(session.phase(), SessionPhase::Authenticated);
    assert_eq!(session.token().as_deref(), Some("persisted"));
}

#[test]
fn restore_without_token_is_unauthenticated() {
    let session = Session::new(SessionStore::in_memory());
    session.restore();
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn accept_signed_in_persists_token() {
    let session = Session::new(SessionStore::in_memory());
    session.restore();
    assert!(session.accept(&AuthOutcome::SignedIn("tok123".to_owned())));
    assert_eq!(session.store().get().as_deref(), Some("tok123"));
    assert_eq!(session.phase(), SessionPhase::Authenticated);
}

#[test]
fn accept_failure_leaves_token_unset() {
    let session = Session::new(SessionStore::in_memory());
    session.restore();
    assert!(!session.accept(&AuthOutcome::Failed("E-mail já registrado".to_owned())));
    assert_eq!(session.store().get(), None);
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn sign_out_clears_store_and_state() {
    let session = Session::new(SessionStore::in_memory());
    session.sign_in("tok".to_owned());
    session.sign_out();
    assert_eq!(session.store().get(), None);
    assert_eq!(session.token(), None);
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn end_if_unauthorized_signs_out_on_401() {
    let session = Session::new(SessionStore::in_memory());
    session.sign_in("stale".to_owned());
    session.end_if_unauthorized::<Vec<String>>(&Err(ApiError::Unauthorized { message: None }));
    assert_eq!(session.phase(), SessionPhase::Unauthenticated);
    assert_eq!(session.store().get(), None);
}

#[test]
fn end_if_unauthorized_keeps_session_on_other_errors() {
    let session = Session::new(SessionStore::in_memory());
    session.sign_in("tok".to_owned());
    session.end_if_unauthorized::<String>(&Err(ApiError::Rejected { status: 409, message: "dup".to_owned() }));
    session.end_if_unauthorized(&Ok(()));
    assert_eq!(session.phase(), SessionPhase::Authenticated);
}
