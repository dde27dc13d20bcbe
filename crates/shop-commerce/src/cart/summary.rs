//! Order summary calculations.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Totals shown in the order summary panel. Derived on every render and
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat shipping fee; zero for an empty cart.
    pub shipping_fee: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LineTotal>,
}

impl OrderSummary {
    /// Compute the summary for `cart` with a flat `shipping_fee`.
    pub fn compute(cart: &Cart, shipping_fee: Money) -> Self {
        let currency = shipping_fee.currency;
        let lines: Vec<LineTotal> = cart
            .items()
            .iter()
            .map(|item| LineTotal {
                product_id: item.product_id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        let item_count = cart.item_count();
        let subtotal = lines
            .iter()
            .fold(Money::zero(currency), |acc, line| acc + line.total);
        let shipping_fee = if item_count > 0 {
            shipping_fee
        } else {
            Money::zero(currency)
        };

        Self {
            item_count,
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
            lines,
        }
    }

    /// Summary of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self::compute(&Cart::new(), Money::zero(currency))
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Total for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineTotal {
    /// Product id.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub total: Money,
}
