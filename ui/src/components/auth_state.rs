use chrono::Utc;
use dioxus::prelude::*;

use foodnest_common::session::{
    self, LoginError, Session, AUTH_COOKIE, SESSION_TTL_DAYS, TOKEN_COOKIE,
};

use super::browser;

/// Simulated backend round-trip for the mock login.
const LOGIN_LATENCY_MS: u32 = 1_000;

/// Session state mirrored from the cookie pair.
///
/// This is a mock: any readable cookie pair is trusted, with no server
/// verification. A real deployment would replace this with a verified
/// server session; everything that trusts the cookies lives here and in
/// `foodnest_common::session` so that swap stays local.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    user: Option<Session>,
}

impl AuthState {
    /// Rebuild from the current cookies.
    pub fn load() -> Self {
        let user = session::parse_session(
            browser::cookie(AUTH_COOKIE).as_deref(),
            browser::cookie(TOKEN_COOKIE).as_deref(),
        );
        Self { user }
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    /// Valid only while the parsed user and the token cookie both exist.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && browser::cookie(TOKEN_COOKIE).is_some()
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Check the mock credentials and establish the cookie-backed session.
///
/// Writes both cookies on success and updates the shared signal so the
/// navbar and route guard re-render without a reload.
pub async fn login(
    mut auth: Signal<AuthState>,
    email: String,
    password: String,
) -> Result<Session, LoginError> {
    browser::sleep_ms(LOGIN_LATENCY_MS).await;

    let user = session::authenticate(&email, &password, Utc::now())?;
    let serialized = serde_json::to_string(&user).expect("serialization should not fail");
    browser::set_cookie(AUTH_COOKIE, &serialized, SESSION_TTL_DAYS);
    browser::set_cookie(
        TOKEN_COOKIE,
        &session::mock_token(browser::now_millis()),
        SESSION_TTL_DAYS,
    );

    auth.set(AuthState {
        user: Some(user.clone()),
    });
    tracing::info!("Signed in as {}", user.email);
    Ok(user)
}

/// Drop both cookies and return to the login page.
pub fn logout(mut auth: Signal<AuthState>) {
    browser::delete_cookie(AUTH_COOKIE);
    browser::delete_cookie(TOKEN_COOKIE);
    auth.set(AuthState::default());
    tracing::info!("Signed out");
    browser::hard_redirect("/login");
}
