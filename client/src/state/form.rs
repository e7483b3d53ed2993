//! Login/register form model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential form component keeps one `FormState` in a signal. The model
//! owns the submit lifecycle: validation, the in-flight flag that blocks a
//! second submission, and the error message shown after a failed attempt.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;
use crate::net::types::{Credential, TokenResponse};
use crate::state::session::Session;
use crate::util::email::looks_like_email;

pub const MISSING_FIELDS_MESSAGE: &str = "Preencha e-mail e senha.";
pub const INVALID_EMAIL_MESSAGE: &str = "Informe um e-mail válido.";

/// Which remote operation the form submits to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Entrar",
            Self::Register => "Criar Conta",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Entrar",
            Self::Register => "Cadastrar",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Login => "Entrando...",
            Self::Register => "Cadastrando...",
        }
    }

    /// Message shown when the failure carries no server text.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Erro ao entrar",
            Self::Register => "Erro ao registrar",
        }
    }
}

/// Result of one login/register attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    SignedIn(String),
    Failed(String),
}

impl AuthOutcome {
    pub fn from_response(mode: AuthMode, result: Result<TokenResponse, ApiError>) -> Self {
        match result {
            Ok(TokenResponse { access_token }) if !access_token.is_empty() => Self::SignedIn(access_token),
            Ok(_) => Self::Failed(mode.fallback_message().to_owned()),
            Err(e) => Self::Failed(e.user_message(mode.fallback_message())),
        }
    }
}

/// Why a submission did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    MissingField,
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub identifier: String,
    pub secret: String,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl FormState {
    /// Start a submission. On success the form is marked in flight and the
    /// credential to send is returned.
    ///
    /// # Errors
    ///
    /// Returns why nothing should be sent. A submission while another is in
    /// flight leaves the state untouched.
    pub fn begin_submit(&mut self) -> Result<Credential, SubmitBlocked> {
        if self.in_flight {
            return Err(SubmitBlocked::InFlight);
        }
        self.error = None;
        let identifier = self.identifier.trim();
        if identifier.is_empty() || self.secret.is_empty() {
            self.error = Some(MISSING_FIELDS_MESSAGE.to_owned());
            return Err(SubmitBlocked::MissingField);
        }
        if !looks_like_email(identifier) {
            self.error = Some(INVALID_EMAIL_MESSAGE.to_owned());
            return Err(SubmitBlocked::InvalidEmail);
        }
        self.in_flight = true;
        Ok(Credential { identifier: identifier.to_owned(), secret: self.secret.clone() })
    }

    /// Record the end of the in-flight submission.
    pub fn finish(&mut self, outcome: &AuthOutcome) {
        self.in_flight = false;
        match outcome {
            AuthOutcome::SignedIn(_) => {
                self.secret.clear();
                self.error = None;
            }
            AuthOutcome::Failed(message) => self.error = Some(message.clone()),
        }
    }

    /// Apply the API response to the form and, on success, to the session.
    pub fn complete(
        &mut self,
        mode: AuthMode,
        result: Result<TokenResponse, ApiError>,
        session: &Session,
    ) -> AuthOutcome {
        let outcome = AuthOutcome::from_response(mode, result);
        self.finish(&outcome);
        session.accept(&outcome);
        outcome
    }
}
