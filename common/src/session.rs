use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cookie holding the JSON-serialized session record.
pub const AUTH_COOKIE: &str = "foodnest_auth";
/// Cookie holding the opaque bearer token.
pub const TOKEN_COOKIE: &str = "foodnest_token";
/// Both cookies expire after this many days.
pub const SESSION_TTL_DAYS: i64 = 7;

/// The one credential pair the mock backend accepts.
///
/// Stand-in for a real credential check; a deployment would replace
/// `authenticate` with a server call and never ship these constants.
pub const MOCK_EMAIL: &str = "admin@foodnest.com";
pub const MOCK_PASSWORD: &str = "admin123";

/// A signed-in user, as stored in the auth cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub login_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    InvalidCredentials,
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

/// Check credentials against the mock pair and build the session record.
pub fn authenticate(email: &str, password: &str, now: DateTime<Utc>) -> Result<Session, LoginError> {
    if email == MOCK_EMAIL && password == MOCK_PASSWORD {
        Ok(Session {
            id: "1".into(),
            email: email.into(),
            name: "Admin User".into(),
            role: "admin".into(),
            login_time: now,
        })
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

/// Token cookie value derived from the login instant.
pub fn mock_token(now_millis: i64) -> String {
    format!("mock_jwt_token_{now_millis}")
}

/// Parse the session out of the cookie pair.
///
/// A session exists only when BOTH cookies are present and the user cookie
/// parses; anything else (including corrupt JSON) is simply no session.
pub fn parse_session(user_cookie: Option<&str>, token_cookie: Option<&str>) -> Option<Session> {
    let user = user_cookie?;
    token_cookie?;
    serde_json::from_str(user).ok()
}
