// src/auth/service.rs

use thiserror::Error;
use tracing::{info, warn};

use super::models::User;
use super::store::UserStore;
use crate::common::helpers::is_valid_email;
use crate::common::{safe_email_log, Alert, AppError};

// ============================================================================
// Auth Errors
// ============================================================================

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter a valid email address.")]
    MalformedEmail,

    #[error("Please enter your password.")]
    MissingPassword,

    /// One message for both unknown email and wrong password, so the
    /// response never reveals which one was off
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        AppError::Unauthorized(error.to_string())
    }
}

// ============================================================================
// Auth Session
// ============================================================================

/// Tracks who is signed in for one running instance of the app
#[derive(Debug, Default)]
pub struct AuthSession {
    current: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Attempt to sign in: precheck the credential shapes, then do a
    /// linear lookup for an exact email + password match.
    pub fn login(
        &mut self,
        store: &dyn UserStore,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if !is_valid_email(email) {
            return Err(AuthError::MalformedEmail);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }

        let found = store
            .all()
            .into_iter()
            .find(|user| user.email == email && user.password == password);

        match found {
            Some(user) => {
                info!(email = %safe_email_log(email), "login succeeded");
                self.current = Some(user.clone());
                Ok(user)
            }
            None => {
                warn!(email = %safe_email_log(email), "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn logout(&mut self) {
        self.current = None;
    }
}

/// Alert the sign-in page shows for a login outcome
pub fn login_alert(outcome: &Result<User, AuthError>) -> Alert {
    match outcome {
        Ok(_) => Alert::success("Login successful! Redirecting to your dashboard now ..."),
        Err(error) => Alert::error(error.to_string()),
    }
}
