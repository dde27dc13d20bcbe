//! Checkout module.
//!
//! Contains the shipping and payment forms and the checkout flow.

mod address;
mod flow;
mod payment;

pub use address::ShippingForm;
pub use flow::{CheckoutError, CheckoutFlow, CheckoutStep, OrderReceipt};
pub use payment::PaymentForm;
