use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, r#"{"error":"token inválido"}"#);
    assert_eq!(err, ApiError::Unauthorized { message: Some("token inválido".to_owned()) });
    assert!(err.is_unauthorized());
}

#[test]
fn from_status_401_without_body_has_no_message() {
    let err = ApiError::from_status(401, "");
    assert_eq!(err, ApiError::Unauthorized { message: None });
    assert_eq!(err.user_message("Erro ao entrar"), "Erro ao entrar");
}

#[test]
fn user_message_shows_401_server_text() {
    let err = ApiError::from_status(401, r#"{"detail":"Credenciais inválidas"}"#);
    assert_eq!(err.user_message("Erro ao entrar"), "Credenciais inválidas");
}

#[test]
fn from_status_keeps_server_error_message() {
    let err = ApiError::from_status(400, r#"{"error":"E-mail já registrado"}"#);
    assert_eq!(
        err,
        ApiError::Rejected { status: 400, message: "E-mail já registrado".to_owned() }
    );
}

#[test]
fn from_status_without_message_is_malformed() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert!(matches!(err, ApiError::Malformed(ref m) if m.starts_with("status 502")));
}

#[test]
fn from_status_truncates_long_bodies() {
    let body = "x".repeat(1000);
    let ApiError::Malformed(message) = ApiError::from_status(500, &body) else {
        panic!("expected malformed");
    };
    assert!(message.ends_with("... (truncated)"));
    assert!(message.len() < 300);
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Rejected { status: 409, message: "URL já monitorada".to_owned() };
    assert_eq!(err.user_message("Erro"), "URL já monitorada");
}

#[test]
fn user_message_falls_back_for_other_variants() {
    for err in [
        ApiError::Transport("offline".to_owned()),
        ApiError::Unauthorized { message: None },
        ApiError::Malformed("bad json".to_owned()),
        ApiError::Unavailable,
    ] {
        assert_eq!(err.user_message("Erro ao registrar"), "Erro ao registrar");
    }
}
