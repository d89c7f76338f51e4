//! # Identity Store
//!
//! The set of emails that have already registered.
//!
//! The registration pipeline only needs two operations from its store:
//! a membership test (guard 3) and an insert (success path). Keeping them
//! behind [`IdentityStore`] lets a web service swap in a database-backed or
//! externally synchronized store without touching the guard order.
//!
//! ```text
//! ┌──────────────────────────┐        ┌────────────────────────────────┐
//! │  RegistrationValidator   │        │  IdentityStore                 │
//! │                          │        │                                │
//! │  guard 3 ────────────────┼──────► │  contains(email) -> bool       │
//! │  success path ───────────┼──────► │  insert(email)   -> bool       │
//! └──────────────────────────┘        └────────────────────────────────┘
//! ```

use std::collections::HashSet;

/// Membership store for registered emails.
///
/// ## Contract
/// - Comparison is exact-string: no trimming, no case folding
/// - Entries are never removed
/// - `insert` returns `true` only when the email was not present
pub trait IdentityStore {
    /// Returns true if `email` has already registered.
    fn contains(&self, email: &str) -> bool;

    /// Records `email` as registered. Returns false if it was already present.
    fn insert(&mut self, email: String) -> bool;

    /// Number of registered identities.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store backed by a `HashSet`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityStore {
    emails: HashSet<String>,
}

impl InMemoryIdentityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    fn insert(&mut self, email: String) -> bool {
        self.emails.insert(email)
    }

    fn len(&self) -> usize {
        self.emails.len()
    }
}

impl<S: IdentityStore + ?Sized> IdentityStore for Box<S> {
    fn contains(&self, email: &str) -> bool {
        (**self).contains(email)
    }

    fn insert(&mut self, email: String) -> bool {
        (**self).insert(email)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
