//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  RegistrationError  - Single-cause registration rejection              │
//! │                       (returned inside RegistrationOutcome, never      │
//! │                        as Err)                                         │
//! │                                                                         │
//! │  CheckoutError      - Cart / checkout business rule violations         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ConfigError        - registration.toml / environment problems         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each registration variant maps to exactly one user-facing message

use thiserror::Error;

// =============================================================================
// Registration Error
// =============================================================================

/// Why a registration attempt was rejected.
///
/// Variants are listed in guard order: when several rules are broken at
/// once, the rejection is always the first variant that applies.
///
/// ## Guard Order
/// ```text
/// email ──► EmptyEmail ──► InvalidEmailFormat ──► DuplicateEmail
///                                                       │
/// password ◄────────────────────────────────────────────┘
///    │
///    └──► EmptyPassword ──► EmptyConfirmation ──► PasswordMismatch
///                                                       │
///                                                       ▼
///                                                  WeakPassword
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RegistrationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    /// Email does not have the `local@domain.tld` shape.
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Email has already been registered (exact, case-sensitive match).
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Confirmation password cannot be empty")]
    EmptyConfirmation,

    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password is too short or lacks a letter or a digit.
    #[error("Password is not strong enough")]
    WeakPassword,
}

impl RegistrationError {
    /// Stable machine-readable code, used as a tracing field.
    pub const fn code(&self) -> &'static str {
        match self {
            RegistrationError::EmptyEmail => "empty_email",
            RegistrationError::InvalidEmailFormat => "invalid_email_format",
            RegistrationError::DuplicateEmail => "duplicate_email",
            RegistrationError::EmptyPassword => "empty_password",
            RegistrationError::EmptyConfirmation => "empty_confirmation",
            RegistrationError::PasswordMismatch => "password_mismatch",
            RegistrationError::WeakPassword => "weak_password",
        }
    }
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Cart and checkout business rule errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Adding the line would push the cart total past `i64::MAX` cents.
    #[error("Cart total is too large")]
    TotalOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for cart operations.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading [`crate::config::RegistrationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CoreResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_error_messages() {
        let cases = [
            (RegistrationError::EmptyEmail, "Email cannot be empty"),
            (RegistrationError::InvalidEmailFormat, "Invalid email format"),
            (RegistrationError::DuplicateEmail, "Email already registered"),
            (RegistrationError::EmptyPassword, "Password cannot be empty"),
            (
                RegistrationError::EmptyConfirmation,
                "Confirmation password cannot be empty",
            ),
            (RegistrationError::PasswordMismatch, "Passwords do not match"),
            (RegistrationError::WeakPassword, "Password is not strong enough"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_registration_messages_are_distinct() {
        let all = [
            RegistrationError::EmptyEmail,
            RegistrationError::InvalidEmailFormat,
            RegistrationError::DuplicateEmail,
            RegistrationError::EmptyPassword,
            RegistrationError::EmptyConfirmation,
            RegistrationError::PasswordMismatch,
            RegistrationError::WeakPassword,
        ];
        let messages: std::collections::HashSet<String> =
            all.iter().map(|e| e.to_string()).collect();
        let codes: std::collections::HashSet<&str> = all.iter().map(|e| e.code()).collect();

        assert_eq!(messages.len(), all.len());
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let err: CheckoutError = validation_err.into();
        assert!(matches!(err, CheckoutError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: name is required");
    }
}
