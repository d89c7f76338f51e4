//! # Shared Registration State
//!
//! Thread-safe handle around a [`RegistrationValidator`].
//!
//! ## Why One Lock Around the Whole Pipeline?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Without a single critical section                                      │
//! │                                                                         │
//! │  Thread A: contains("a@b.c") = false                                    │
//! │  Thread B: contains("a@b.c") = false                                    │
//! │  Thread A: insert("a@b.c")  ──► "Registration successful"               │
//! │  Thread B: insert("a@b.c")  ──► "Registration successful"   ❌ twice    │
//! │                                                                         │
//! │  With SharedRegistrationValidator                                       │
//! │                                                                         │
//! │  Thread A: lock ─ guards 1-7 ─ insert ─ unlock ──► success              │
//! │  Thread B: lock ─ guard 3 fails ─ unlock       ──► "already registered" │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::identity::{IdentityStore, InMemoryIdentityStore};
use crate::registration::{RegistrationOutcome, RegistrationValidator};

/// Clone-able, thread-safe registration handle.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<RegistrationValidator>>`:
/// - `Arc`: shared ownership across threads / tasks
/// - `Mutex`: the duplicate check and the insert happen under one lock
///
/// Registrations are short and always write on success, so a `RwLock`
/// would not buy anything.
#[derive(Debug)]
pub struct SharedRegistrationValidator<S = InMemoryIdentityStore> {
    inner: Arc<Mutex<RegistrationValidator<S>>>,
}

impl<S> Clone for SharedRegistrationValidator<S> {
    fn clone(&self) -> Self {
        SharedRegistrationValidator {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRegistrationValidator<InMemoryIdentityStore> {
    /// Creates a shared validator with an empty in-memory store.
    pub fn new() -> Self {
        Self::from_validator(RegistrationValidator::new())
    }
}

impl Default for SharedRegistrationValidator<InMemoryIdentityStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdentityStore> SharedRegistrationValidator<S> {
    pub fn from_validator(validator: RegistrationValidator<S>) -> Self {
        SharedRegistrationValidator {
            inner: Arc::new(Mutex::new(validator)),
        }
    }

    /// Runs the full guard pipeline under the lock.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> RegistrationOutcome {
        self.lock().register(email, password, confirm_password)
    }

    /// Executes a function with read access to the validator.
    ///
    /// ## Usage
    /// ```rust
    /// use checkout_core::shared::SharedRegistrationValidator;
    ///
    /// let shared = SharedRegistrationValidator::new();
    /// let count = shared.with_validator(|v| v.registered_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_validator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RegistrationValidator<S>) -> R,
    {
        f(&self.lock())
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.lock().is_registered(email)
    }

    pub fn registered_count(&self) -> usize {
        self.lock().registered_count()
    }

    // A panic while holding the lock cannot leave the store half-updated
    // (the only write is a single insert), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, RegistrationValidator<S>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
