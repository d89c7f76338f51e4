//! # checkout-core: Registration & Checkout Business Rules
//!
//! Account registration guards plus the pieces of the checkout flow the
//! registration step sits next to. Nothing here talks to a network or a
//! database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Web handler / CLI / test harness                   │   │
//! │  │   sign-up form ──► browse ──► cart ──► pay ──► confirm order    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐ ┌───────────┐ ┌─────────┐ ┌───────────────┐  │   │
//! │  │  │ registration │ │ identity  │ │  cart   │ │ collaborators │  │   │
//! │  │  │  guards 1-7  │ │  store    │ │  Money  │ │ Payment/Order │  │   │
//! │  │  │  outcome     │ │  (trait)  │ │  totals │ │ Search traits │  │   │
//! │  │  └──────────────┘ └───────────┘ └─────────┘ └───────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO NETWORK • NO DATABASE • REJECTIONS ARE DATA                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registration`] - Guard pipeline and [`RegistrationOutcome`]
//! - [`identity`] - Registered-identity store trait and in-memory store
//! - [`shared`] - Thread-safe registration handle
//! - [`validation`] - Email shape, password strength, cart input rules
//! - [`config`] - Registration policy loading (TOML + environment)
//! - [`money`] - Integer-cent money
//! - [`cart`] - Shopping cart and totals
//! - [`collaborators`] - Payment, order placement and search boundaries
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{RegistrationError, RegistrationValidator};
//!
//! let mut validator = RegistrationValidator::new();
//!
//! let outcome = validator.register("user@example.com", "Password123", "Password123");
//! assert_eq!(
//!     outcome.message(),
//!     Some("Registration successful, confirmation email sent")
//! );
//!
//! let outcome = validator.register("userexample.com", "Password123", "Password123");
//! assert_eq!(outcome.rejection(), Some(&RegistrationError::InvalidEmailFormat));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod identity;
pub mod money;
pub mod registration;
pub mod shared;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use config::RegistrationConfig;
pub use error::{CheckoutError, ConfigError, RegistrationError, ValidationError};
pub use identity::{IdentityStore, InMemoryIdentityStore};
pub use money::Money;
pub use registration::{RegistrationOutcome, RegistrationResponse, RegistrationValidator};
pub use shared::SharedRegistrationValidator;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single cart line.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of a cart line name, in characters.
pub const MAX_ITEM_NAME_LENGTH: usize = 200;
