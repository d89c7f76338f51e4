//! # Validation Module
//!
//! Pure predicates and validators used by registration and the cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: checkout-core (THIS MODULE)                                  │
//! │  ├── Email shape, password strength                                    │
//! │  └── Cart quantity / price / size rules                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: IdentityStore                                                │
//! │  └── Uniqueness of registered emails                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{is_strong_password, is_valid_email_shape};
//!
//! assert!(is_valid_email_shape("user@example.com"));
//! assert!(!is_valid_email_shape("userexample.com"));
//!
//! assert!(is_strong_password("Password123", 8));
//! assert!(!is_strong_password("pass", 8));
//! ```

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_NAME_LENGTH, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Registration Predicates
// =============================================================================

/// Checks the structural shape `local@domain.tld`.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part before it
/// - Domain part contains a `.` with at least one character on each side
///
/// This is a shape check, not RFC 5322 validation. `a@b.c` passes,
/// `a@.c`, `a@b.`, `a@@b.c` and `a@b.c@d` do not.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::is_valid_email_shape;
///
/// assert!(is_valid_email_shape("user@mail.example.com"));
/// assert!(!is_valid_email_shape("user@localhost"));
/// ```
pub fn is_valid_email_shape(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // `.` is a single byte, so `i + 1 < len` means something follows it
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Checks password strength.
///
/// ## Rules
/// - At least `min_length` characters (counted as `char`s, not bytes)
/// - At least one ASCII letter (`A-Z` or `a-z`)
/// - At least one ASCII digit (`0-9`)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::is_strong_password;
///
/// assert!(is_strong_password("abcdefg1", 8));   // exactly 8
/// assert!(!is_strong_password("abcdef1", 8));   // 7 chars
/// assert!(!is_strong_password("abcdefgh", 8));  // no digit
/// assert!(!is_strong_password("12345678", 8));  // no letter
/// ```
pub fn is_strong_password(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a cart line item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most MAX_ITEM_NAME_LENGTH (200) characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates cart size (number of distinct lines) before adding a new one.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_accepts() {
        assert!(is_valid_email_shape("user@example.com"));
        assert!(is_valid_email_shape("a@b.c"));
        assert!(is_valid_email_shape("first.last@sub.example.co.uk"));
        assert!(is_valid_email_shape("user@example.com."));
        assert!(is_valid_email_shape("user name@exa mple.com"));
    }

    #[test]
    fn test_email_shape_rejects() {
        assert!(!is_valid_email_shape(""));
        assert!(!is_valid_email_shape("userexample.com"));
        assert!(!is_valid_email_shape("@example.com"));
        assert!(!is_valid_email_shape("user@"));
        assert!(!is_valid_email_shape("user@localhost"));
        assert!(!is_valid_email_shape("user@.com"));
        assert!(!is_valid_email_shape("user@example."));
        assert!(!is_valid_email_shape("user@."));
        assert!(!is_valid_email_shape("user@@example.com"));
        assert!(!is_valid_email_shape("user@example.com@other"));
    }

    #[test]
    fn test_password_strength_boundary() {
        assert!(is_strong_password("abcdefg1", 8));
        assert!(!is_strong_password("abcdef1", 8));
        assert!(is_strong_password("Password123", 8));
    }

    #[test]
    fn test_password_strength_composition() {
        assert!(!is_strong_password("abcdefghij", 8));
        assert!(!is_strong_password("1234567890", 8));
        assert!(!is_strong_password("!!!!!!!!", 8));
        // Non-ASCII letters and digits do not count
        assert!(!is_strong_password("ééééééé1", 8));
        assert!(!is_strong_password("abcdefg١", 8));
    }

    #[test]
    fn test_password_length_counts_chars() {
        // 7 ASCII + 1 multibyte char = 8 chars, 9 bytes
        assert!(is_strong_password("abcdef1é", 8));
        assert!(!is_strong_password("abcde1é", 8));
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Spaghetti").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }
}
