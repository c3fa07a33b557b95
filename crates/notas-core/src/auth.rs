//! Login gate.
//!
//! The secret is a compile-time constant compared with plain string equality.
//! There is no hashing, no constant-time comparison and no attempt limit; this
//! gate keeps casual users out of the grade screen and nothing more.

use thiserror::Error;

use crate::nav::{Navigator, Route};
use crate::notify::{Notice, Notifier};

/// The only accepted password.
pub const VALID_PASSWORD: &str = "fallout76";

/// Message shown when the password does not match.
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Contraseña incorrecta";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Contraseña incorrecta")]
    InvalidCredential,
}

/// Checks a password and returns the route to open on success.
///
/// Exact, case-sensitive comparison. Input is not trimmed.
pub fn attempt_login(input: &str) -> Result<Route, AuthError> {
    if input == VALID_PASSWORD {
        Ok(Route::Grades)
    } else {
        Err(AuthError::InvalidCredential)
    }
}

/// Login gate wired to its collaborators.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginGate;

impl LoginGate {
    /// Attempts a login and performs the resulting side effect.
    ///
    /// On success the grade screen is pushed, so back returns here. On failure
    /// the user is notified and nothing navigates. Every call is independent.
    pub fn submit(
        &self,
        input: &str,
        navigator: &mut impl Navigator,
        notifier: &mut impl Notifier,
    ) -> Result<(), AuthError> {
        match attempt_login(input) {
            Ok(route) => {
                navigator.push(route);
                Ok(())
            }
            Err(err) => {
                notifier.notify(Notice::invalid_credential());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavRequest;

    #[test]
    fn test_valid_password_opens_grades() {
        assert_eq!(attempt_login("fallout76"), Ok(Route::Grades));
    }

    #[test]
    fn test_near_misses_are_rejected() {
        for input in [
            "",
            "Fallout76",
            "FALLOUT76",
            " fallout76",
            "fallout76 ",
            "fallout7",
            "fallout766",
            "fallout76\n",
        ] {
            assert_eq!(
                attempt_login(input),
                Err(AuthError::InvalidCredential),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_submit_success_pushes_grades_without_notice() {
        let mut nav: Vec<NavRequest> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        let result = LoginGate.submit("fallout76", &mut nav, &mut notices);

        assert!(result.is_ok());
        assert_eq!(nav, vec![NavRequest::Push(Route::Grades)]);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_submit_failure_notifies_and_does_not_navigate() {
        let mut nav: Vec<NavRequest> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        let result = LoginGate.submit("password", &mut nav, &mut notices);

        assert_eq!(result, Err(AuthError::InvalidCredential));
        assert!(nav.is_empty());
        assert_eq!(notices, vec![Notice::invalid_credential()]);
    }

    #[test]
    fn test_repeated_failures_are_independent() {
        let mut nav: Vec<NavRequest> = Vec::new();
        let mut notices: Vec<Notice> = Vec::new();

        for _ in 0..5 {
            let _ = LoginGate.submit("nope", &mut nav, &mut notices);
        }
        LoginGate
            .submit("fallout76", &mut nav, &mut notices)
            .expect("no lockout after failures");

        assert_eq!(notices.len(), 5);
        assert_eq!(nav, vec![NavRequest::Push(Route::Grades)]);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            AuthError::InvalidCredential.to_string(),
            "Contraseña incorrecta"
        );
    }
}
