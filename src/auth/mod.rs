//! Browser side session handling.
//!
//! The session returned by the sign in server function lives in an [`AuthState`]
//! context and is mirrored to `localStorage` so a reload keeps the user signed in.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::supabase::models::Session;
use crate::supabase::refresh;

mod storage;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
    /// Set once the stored session has been read. Storage is only reachable in
    /// the browser, so server renders never see this as true.
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn restore(&mut self) {
        let stored = storage::load();
        if let Some(s) = &stored {
            tracing::debug!("Restored session for user {}", s.user.id);
        }
        self.session.set(stored);
        self.restored.set(true);
    }

    pub fn login(&mut self, session: Session) {
        storage::save(&session);
        self.session.set(Some(session));
    }

    pub fn logout(&mut self) {
        storage::clear();
        self.session.set(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.session.cloned()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    /// Trade the refresh token for a new session. A failed refresh signs the
    /// user out.
    pub async fn refresh(mut self, session: Session) -> Option<Session> {
        match refresh(session.refresh_token).await {
            Ok(fresh) => {
                tracing::info!("Refreshed session for user {}", fresh.user.id);
                self.login(fresh.clone());
                Some(fresh)
            }
            Err(e) => {
                tracing::warn!("Session refresh failed: {}", e);
                self.logout();
                None
            }
        }
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Next step for a signed in route
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateAction {
    /// Stored session not read yet
    Wait,
    Allow,
    Login,
    Refresh,
    Logout,
}

/// Decide what a protected route does with the current session.
///
/// An expired session gets one refresh; if it comes back expired again the
/// user is signed out. Callers clear `refresh_attempted` once they see `Allow`.
pub fn gate(
    restored: bool,
    session: Option<&Session>,
    now: DateTime<Utc>,
    refresh_attempted: bool,
) -> GateAction {
    if !restored {
        return GateAction::Wait;
    }
    match session {
        None => GateAction::Login,
        Some(s) if !s.is_expired(now) => GateAction::Allow,
        Some(_) if refresh_attempted => GateAction::Logout,
        Some(_) => GateAction::Refresh,
    }
}

pub fn is_signed_in(restored: bool, session: Option<&Session>, now: DateTime<Utc>) -> bool {
    gate(restored, session, now, false) == GateAction::Allow
}

/// What the password recovery link carried in its fragment
#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryLink {
    Token { access_token: String },
    Error(String),
    Missing,
}

/// Parse the `#access_token=...&type=recovery` fragment appended by the
/// recovery email redirect.
pub fn parse_recovery_fragment(hash: &str) -> RecoveryLink {
    let fragment = hash.trim_start_matches('#');
    if fragment.is_empty() {
        return RecoveryLink::Missing;
    }

    // Borrow the form decoder from `Url` instead of hand rolling one
    let Ok(url) = reqwest::Url::parse(&format!("http://localhost/?{fragment}")) else {
        return RecoveryLink::Missing;
    };

    let mut access_token = None;
    let mut link_type = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "type" => link_type = Some(value.into_owned()),
            "error_description" => error = Some(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return RecoveryLink::Error(error);
    }

    match (access_token, link_type.as_deref()) {
        (Some(access_token), None | Some("recovery")) if !access_token.is_empty() => {
            RecoveryLink::Token { access_token }
        }
        _ => RecoveryLink::Missing,
    }
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Enter a valid email address".to_string()),
    }
}
