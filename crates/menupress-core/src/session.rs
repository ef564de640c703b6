//! Shared-password admin session and the `/admin` route guard.
//!
//! There is one password for the whole panel. A successful login sets the
//! `admin_session` cookie; the guard only checks that the cookie is present.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Cookie set after a successful login.
pub const SESSION_COOKIE: &str = "admin_session";
/// Value stored in [`SESSION_COOKIE`].
pub const SESSION_COOKIE_VALUE: &str = "true";
/// Environment variable holding the admin password.
pub const PASSWORD_ENV: &str = "ADMIN_PASSWORD";

pub const LOGIN_PATH: &str = "/admin/login";
/// Where a successful login lands.
pub const AFTER_LOGIN_PATH: &str = "/admin/items";
/// Where an already signed-in visitor of the login page is sent.
pub const DASHBOARD_PATH: &str = "/admin/categories";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("admin password must not be empty")]
    EmptyPassword,

    #[error("environment variable {0} is not set")]
    MissingEnv(String),
}

/// Checks login attempts against the configured password.
///
/// Only a SHA-256 digest of the password is kept in memory.
#[derive(Clone)]
pub struct AdminGate {
    digest: [u8; 32],
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

impl AdminGate {
    pub fn new(password: &str) -> Result<Self, SessionError> {
        if password.is_empty() {
            return Err(SessionError::EmptyPassword);
        }
        Ok(Self {
            digest: digest(password),
        })
    }

    /// Read the password from `ADMIN_PASSWORD`.
    pub fn from_env() -> Result<Self, SessionError> {
        let password = std::env::var(PASSWORD_ENV)
            .map_err(|_| SessionError::MissingEnv(PASSWORD_ENV.to_string()))?;
        Self::new(&password)
    }

    pub fn verify(&self, candidate: &str) -> bool {
        let candidate = digest(candidate);
        // Constant-time comparison.
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }

    /// Handle a login form submission.
    pub fn login(&self, password: &str) -> LoginOutcome {
        if self.verify(password) {
            tracing::info!("admin login succeeded");
            LoginOutcome::Success {
                cookie: (SESSION_COOKIE, SESSION_COOKIE_VALUE),
                redirect: AFTER_LOGIN_PATH,
            }
        } else {
            tracing::warn!("admin login rejected");
            LoginOutcome::Rejected {
                message: "Invalid password",
            }
        }
    }
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Set `cookie` (name, value) and redirect.
    Success {
        cookie: (&'static str, &'static str),
        redirect: &'static str,
    },
    Rejected { message: &'static str },
}

/// Where logging out sends the browser, after clearing [`SESSION_COOKIE`].
pub fn logout_redirect() -> &'static str {
    LOGIN_PATH
}

/// What the request middleware should do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Continue,
    Redirect(&'static str),
}

/// Gate `/admin` pages on the presence of the session cookie.
pub fn guard_admin_route(path: &str, has_session: bool) -> RouteDecision {
    if !path.starts_with("/admin") {
        return RouteDecision::Continue;
    }

    if path == LOGIN_PATH {
        return if has_session {
            RouteDecision::Redirect(DASHBOARD_PATH)
        } else {
            RouteDecision::Continue
        };
    }

    if has_session {
        RouteDecision::Continue
    } else {
        RouteDecision::Redirect(LOGIN_PATH)
    }
}
