//! # Checkout Collaborators
//!
//! Call boundaries for the services the checkout flow talks to. The core
//! does not implement payment, order placement or restaurant search; it
//! only fixes the shape adapters must honour.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Flow                                    │
//! │                                                                         │
//! │  RestaurantSearch ──► pick restaurant                                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Cart::add_item ──► Cart::calculate_total ──► PaymentRequest            │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                  PaymentProcessor::process_payment      │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │  OrderPlacement (cart, profile, menu) ──► confirm_order(method)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::CartTotals;
use crate::money::Money;

/// Text returned by a processor after a successful simulated authorisation.
pub const PAYMENT_CONFIRMED_MESSAGE: &str = "Payment successful, Order confirmed";

// =============================================================================
// Payment
// =============================================================================

/// Amount to charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub total_amount: Money,
}

impl From<&CartTotals> for PaymentRequest {
    fn from(totals: &CartTotals) -> Self {
        PaymentRequest {
            total_amount: totals.total,
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    CreditCard,
    DebitCard,
    Paypal,
    Cash,
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethodKind::CreditCard => write!(f, "credit_card"),
            PaymentMethodKind::DebitCard => write!(f, "debit_card"),
            PaymentMethodKind::Paypal => write!(f, "paypal"),
            PaymentMethodKind::Cash => write!(f, "cash"),
        }
    }
}

/// Card details supplied with a card payment.
///
/// `Debug` masks everything but the last four digits of the card number.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.card_number.chars().count();
        let last4: String = self
            .card_number
            .chars()
            .skip(digits.saturating_sub(4))
            .collect();
        let masked = format!("****{}", last4);
        f.debug_struct("PaymentDetails")
            .field("card_number", &masked)
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

/// Payment method chosen at order confirmation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub kind: PaymentMethodKind,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod {
            kind: PaymentMethodKind::CreditCard,
        }
    }
}

/// Authorises a payment.
///
/// Implementations return [`PAYMENT_CONFIRMED_MESSAGE`] on success and a
/// human-readable reason otherwise.
pub trait PaymentProcessor {
    fn process_payment(
        &self,
        request: &PaymentRequest,
        method: PaymentMethodKind,
        details: &PaymentDetails,
    ) -> String;
}

// =============================================================================
// Order Placement
// =============================================================================

/// Customer data needed to deliver an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub delivery_address: String,
}

impl UserProfile {
    pub fn new(delivery_address: impl Into<String>) -> Self {
        UserProfile {
            delivery_address: delivery_address.into(),
        }
    }
}

/// Items a restaurant can currently serve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenu {
    pub available_items: BTreeSet<String>,
}

impl RestaurantMenu {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        RestaurantMenu {
            available_items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_available(&self, item: &str) -> bool {
        self.available_items.contains(item)
    }
}

/// Result of confirming an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub success: bool,
    pub message: String,
}

impl OrderConfirmation {
    pub fn confirmed(message: impl Into<String>) -> Self {
        OrderConfirmation {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        OrderConfirmation {
            success: false,
            message: message.into(),
        }
    }
}

/// Confirms an order built from a cart, a user profile and a menu.
pub trait OrderPlacement {
    fn confirm_order(&self, method: &PaymentMethod) -> OrderConfirmation;
}

// =============================================================================
// Restaurant Search
// =============================================================================

/// A restaurant record returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f32,
}

/// Search filters. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantQuery {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
}

impl RestaurantQuery {
    /// Returns true if `restaurant` passes every filter that is set.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.cuisine
            .as_deref()
            .map_or(true, |c| restaurant.cuisine.eq_ignore_ascii_case(c))
            && self
                .location
                .as_deref()
                .map_or(true, |l| restaurant.location.eq_ignore_ascii_case(l))
            && self.min_rating.map_or(true, |r| restaurant.rating >= r)
    }
}

/// Filters a restaurant collection.
pub trait RestaurantSearch {
    fn search_restaurants(&self, query: &RestaurantQuery) -> Vec<Restaurant>;
}
