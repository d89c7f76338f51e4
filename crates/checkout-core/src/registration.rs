//! # Registration
//!
//! The registration guard pipeline.
//!
//! ## Guard Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register(email, password, confirm_password)                           │
//! │                                                                         │
//! │  1. email empty?               ──► "Email cannot be empty"             │
//! │  2. email shape wrong?         ──► "Invalid email format"              │
//! │  3. email already registered?  ──► "Email already registered"          │
//! │  4. password empty?            ──► "Password cannot be empty"          │
//! │  5. confirmation empty?        ──► "Confirmation password cannot..."   │
//! │  6. password != confirmation?  ──► "Passwords do not match"            │
//! │  7. password weak?             ──► "Password is not strong enough"     │
//! │       │                                                                 │
//! │       ▼ all passed                                                      │
//! │  store.insert(email)                                                   │
//! │  "Registration successful, confirmation email sent"                    │
//! │                                                                         │
//! │  The first failing guard wins; later guards are not evaluated.         │
//! │  Only the success path touches the store.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use checkout_core::registration::RegistrationValidator;
//! use checkout_core::RegistrationError;
//!
//! let mut validator = RegistrationValidator::new();
//!
//! let outcome = validator.register("user@example.com", "Password123", "Password123");
//! assert!(outcome.is_success());
//!
//! let again = validator.register("user@example.com", "Password123", "Password123");
//! assert_eq!(again.rejection(), Some(&RegistrationError::DuplicateEmail));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::config::RegistrationConfig;
use crate::error::RegistrationError;
use crate::identity::{IdentityStore, InMemoryIdentityStore};
use crate::validation::{is_strong_password, is_valid_email_shape};

/// Message carried by every successful registration.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful, confirmation email sent";

// =============================================================================
// Outcome
// =============================================================================

/// Result of one registration attempt.
///
/// Either a success with its confirmation message or exactly one rejection.
/// Serializes to the `{ success, message, error }` shape web handlers
/// return (see [`RegistrationResponse`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "RegistrationResponse")]
pub enum RegistrationOutcome {
    Registered { message: &'static str },
    Rejected(RegistrationError),
}

impl RegistrationOutcome {
    fn registered() -> Self {
        RegistrationOutcome::Registered {
            message: REGISTRATION_SUCCESS_MESSAGE,
        }
    }

    /// Returns true if the identity was registered.
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered { .. })
    }

    /// Confirmation text, present only on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            RegistrationOutcome::Registered { message } => Some(*message),
            RegistrationOutcome::Rejected(_) => None,
        }
    }

    /// User-facing rejection text, present only on failure.
    pub fn error(&self) -> Option<String> {
        self.rejection().map(ToString::to_string)
    }

    /// The rejection cause, present only on failure.
    pub fn rejection(&self) -> Option<&RegistrationError> {
        match self {
            RegistrationOutcome::Registered { .. } => None,
            RegistrationOutcome::Rejected(err) => Some(err),
        }
    }

    /// Converts into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<&'static str, RegistrationError> {
        match self {
            RegistrationOutcome::Registered { message } => Ok(message),
            RegistrationOutcome::Rejected(err) => Err(err),
        }
    }
}

/// Wire shape of a [`RegistrationOutcome`].
///
/// Exactly one of `message` / `error` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl From<RegistrationOutcome> for RegistrationResponse {
    fn from(outcome: RegistrationOutcome) -> Self {
        match outcome {
            RegistrationOutcome::Registered { message } => RegistrationResponse {
                success: true,
                message: message.to_string(),
                error: String::new(),
            },
            RegistrationOutcome::Rejected(err) => RegistrationResponse {
                success: false,
                message: String::new(),
                error: err.to_string(),
            },
        }
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Runs the guard pipeline and owns the registered-identity store.
///
/// `register` takes `&mut self`, so sequential use needs no locking. For
/// shared use across threads see
/// [`SharedRegistrationValidator`](crate::shared::SharedRegistrationValidator).
#[derive(Debug, Clone)]
pub struct RegistrationValidator<S = InMemoryIdentityStore> {
    store: S,
    config: RegistrationConfig,
}

impl RegistrationValidator<InMemoryIdentityStore> {
    /// Creates a validator with an empty in-memory store and default policy.
    pub fn new() -> Self {
        Self::with_store(InMemoryIdentityStore::new())
    }

    /// Creates a validator with an empty in-memory store and `config`.
    pub fn with_config(config: RegistrationConfig) -> Self {
        Self::with_store_and_config(InMemoryIdentityStore::new(), config)
    }
}

impl Default for RegistrationValidator<InMemoryIdentityStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdentityStore> RegistrationValidator<S> {
    /// Creates a validator over an existing store with default policy.
    pub fn with_store(store: S) -> Self {
        Self::with_store_and_config(store, RegistrationConfig::default())
    }

    pub fn with_store_and_config(store: S, config: RegistrationConfig) -> Self {
        RegistrationValidator { store, config }
    }

    /// Attempts to register `email`.
    ///
    /// Never panics and never returns `Err`: every violated rule comes back
    /// as [`RegistrationOutcome::Rejected`] with the first failing guard.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegistrationOutcome {
        let domain = email_domain(email);
        if let Err(err) = self.check(email, password, confirm_password) {
            debug!(domain, reason = err.code(), "Registration rejected");
            return RegistrationOutcome::Rejected(err);
        }

        if !self.store.insert(email.to_string()) {
            warn!(domain, "Identity store already held an email it did not report");
        }
        info!(
            domain,
            registered = self.store.len(),
            "Registration successful"
        );
        RegistrationOutcome::registered()
    }

    /// Guards 1-7, in order. Pure: never touches the store's contents.
    fn check(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), RegistrationError> {
        if email.is_empty() {
            return Err(RegistrationError::EmptyEmail);
        }

        if !is_valid_email_shape(email) {
            return Err(RegistrationError::InvalidEmailFormat);
        }

        if self.store.contains(email) {
            return Err(RegistrationError::DuplicateEmail);
        }

        if password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }

        if confirm_password.is_empty() {
            return Err(RegistrationError::EmptyConfirmation);
        }

        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        if !is_strong_password(password, self.config.min_password_length()) {
            return Err(RegistrationError::WeakPassword);
        }

        Ok(())
    }

    /// Returns true if `email` has registered (exact match).
    pub fn is_registered(&self, email: &str) -> bool {
        self.store.contains(email)
    }

    /// Number of successful registrations so far.
    pub fn registered_count(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Consumes the validator, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Domain part of `email`, the only part of an address that gets logged.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

// =============================================================================
// Unit Tests
// =============================================================================
