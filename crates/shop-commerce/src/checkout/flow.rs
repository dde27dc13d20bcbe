//! Checkout flow state machine.

use crate::cart::{CartEngine, OrderSummary};
use crate::checkout::{PaymentForm, ShippingForm};
use crate::notification::Notification;
use crate::validate::FormErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shop_cache::Store;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Cart review and shipping details.
    #[default]
    Cart,
    /// Card details.
    Payment,
    /// Order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a checkout step was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Please log in or sign up to proceed to checkout.")]
    LoginRequired,

    #[error("Your cart is empty! Please add items to your cart before checking out.")]
    EmptyCart,

    #[error("Shipping details are incomplete")]
    InvalidShipping(FormErrors),

    #[error("Payment details are invalid")]
    InvalidPayment(FormErrors),

    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition {
        from: CheckoutStep,
        to: CheckoutStep,
    },
}

impl CheckoutError {
    /// The dialog shown for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            CheckoutError::LoginRequired => Notification::warning("Login Required", self.to_string()),
            CheckoutError::EmptyCart => Notification::warning("Empty Cart", self.to_string()),
            CheckoutError::InvalidShipping(_) => Notification::warning(
                "Incomplete Details",
                "Please complete your shipping details before checking out.",
            ),
            CheckoutError::InvalidPayment(_) => Notification::error(
                "Payment Failed",
                "Please check your card details and try again.",
            ),
            CheckoutError::InvalidTransition { .. } => {
                Notification::error("Checkout Error", self.to_string())
            }
        }
    }

    /// Field messages behind a form failure.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        match self {
            CheckoutError::InvalidShipping(errors) | CheckoutError::InvalidPayment(errors) => {
                Some(errors)
            }
            _ => None,
        }
    }
}

/// What was paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Totals at the moment of payment.
    pub summary: OrderSummary,
    /// Where the order ships.
    pub shipping: ShippingForm,
    /// Masked card number.
    pub card: String,
}

impl OrderReceipt {
    /// The confirmation dialog.
    pub fn notification(&self) -> Notification {
        Notification::success(
            "Order Successful!",
            format!(
                "Thank you for your purchase! {} has been charged to {}.",
                self.summary.total, self.card
            ),
        )
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: Option<ShippingForm>,
}

impl CheckoutFlow {
    /// Create a new checkout flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Shipping details accepted by [`CheckoutFlow::begin`].
    pub fn shipping(&self) -> Option<&ShippingForm> {
        self.shipping.as_ref()
    }

    /// Start checkout: requires a session, a non-empty cart and valid
    /// shipping details, in that order. Moves to [`CheckoutStep::Payment`].
    pub fn begin<S: Store>(
        &mut self,
        engine: &CartEngine<'_, S>,
        signed_in: bool,
        shipping: ShippingForm,
    ) -> Result<(), CheckoutError> {
        if self.step == CheckoutStep::Complete {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::Payment,
            });
        }
        if !signed_in {
            return Err(CheckoutError::LoginRequired);
        }
        if engine.item_count() == 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let mut errors = FormErrors::new();
        if !shipping.validate(&mut errors) {
            return Err(CheckoutError::InvalidShipping(errors));
        }

        self.shipping = Some(shipping);
        self.step = CheckoutStep::Payment;
        debug!(step = %self.step, "Checkout advanced");
        Ok(())
    }

    /// Pay for the cart. On success the cart and its stored record are
    /// cleared and the flow is complete.
    pub fn submit_payment<S: Store>(
        &mut self,
        engine: &CartEngine<'_, S>,
        payment: &PaymentForm,
        today: NaiveDate,
    ) -> Result<OrderReceipt, CheckoutError> {
        if self.step != CheckoutStep::Payment {
            return Err(CheckoutError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::Complete,
            });
        }
        let Some(shipping) = self.shipping.clone() else {
            return Err(CheckoutError::InvalidTransition {
                from: CheckoutStep::Cart,
                to: CheckoutStep::Complete,
            });
        };

        let mut errors = FormErrors::new();
        if !payment.validate(&mut errors, today) {
            return Err(CheckoutError::InvalidPayment(errors));
        }

        let summary = engine.compute_summary();
        if summary.is_empty() {
            self.step = CheckoutStep::Cart;
            return Err(CheckoutError::EmptyCart);
        }

        engine.clear();
        self.step = CheckoutStep::Complete;
        info!(items = summary.item_count, total = %summary.total, "Order placed");

        Ok(OrderReceipt {
            summary,
            shipping,
            card: payment.masked_number(),
        })
    }

    /// Return to the cart step after closing the payment dialog.
    pub fn cancel(&mut self) {
        if self.step == CheckoutStep::Payment {
            self.step = CheckoutStep::Cart;
        }
    }
}
