//! # Cart
//!
//! Shopping cart used by the checkout flow.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Pick menu item ─────────► add_item() ──────────► items.push(item)     │
//! │                                                   (or qty += n)        │
//! │                                                                         │
//! │  Review order ───────────► calculate_total() ───► CartTotals (read)    │
//! │                                                                         │
//! │  Pay ────────────────────► PaymentRequest::from(&totals)               │
//! │                                                                         │
//! │  Abandon ────────────────► clear() ─────────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CheckoutError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_cart_size, validate_item_name, validate_price_cents, validate_quantity,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// A line in the cart.
///
/// The unit price is frozen when the line is first added; adding the same
/// item again only increases the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Menu item name (line key).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    pub quantity: i64,

    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `name` (exact match)
/// - Quantity is always in 1..=999
/// - At most 100 distinct lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` of `name` at `unit_price`, or increases the quantity
    /// of an existing line.
    pub fn add_item(&mut self, name: &str, unit_price: Money, quantity: i64) -> CoreResult<()> {
        validate_item_name(name)?;
        validate_price_cents(unit_price.cents())?;
        validate_quantity(quantity)?;

        let existing = self.items.iter().position(|i| i.name == name);
        let line_price = match existing {
            Some(idx) => {
                let item = &self.items[idx];
                let new_qty = item.quantity + quantity;
                if new_qty > MAX_ITEM_QUANTITY {
                    return Err(CheckoutError::QuantityTooLarge {
                        requested: new_qty,
                        max: MAX_ITEM_QUANTITY,
                    });
                }
                item.unit_price()
            }
            None => {
                validate_cart_size(self.items.len())
                    .map_err(|_| CheckoutError::CartTooLarge { max: MAX_CART_ITEMS })?;
                unit_price
            }
        };

        // Prices and quantities are non-negative, so a total that fits
        // bounds every line total and partial sum as well.
        let total = line_price
            .checked_mul(quantity)
            .and_then(|added| self.calculate_total().total.checked_add(added))
            .ok_or(CheckoutError::TotalOverflow)?;

        match existing {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity += quantity;
                debug!(
                    item = name,
                    quantity = item.quantity,
                    %total,
                    "Increased cart line quantity"
                );
            }
            None => {
                self.items.push(CartItem {
                    name: name.to_string(),
                    unit_price_cents: unit_price.cents(),
                    quantity,
                    added_at: Utc::now(),
                });
                debug!(
                    item = name,
                    quantity,
                    price = %unit_price,
                    %total,
                    "Added cart line"
                );
            }
        }
        Ok(())
    }

    /// Summarises the cart.
    pub fn calculate_total(&self) -> CartTotals {
        CartTotals::from(self)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns true if a line named `name` exists.
    pub fn contains_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Removes every line and resets the creation time.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.items.len(),
            total_quantity: cart.items.iter().map(|i| i.quantity).sum(),
            total: cart.items.iter().map(CartItem::line_total).sum(),
        }
    }
}
