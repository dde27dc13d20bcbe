//! Dialog messages shown after cart, checkout and account actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialog style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    /// Bootstrap icon class for the dialog header.
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bi bi-check-circle-fill",
            NotificationKind::Warning => "bi bi-exclamation-triangle-fill",
            NotificationKind::Error => "bi bi-x-circle-fill",
            NotificationKind::Info => "bi bi-info-circle-fill",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled message with a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Success)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Warning)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Error)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, NotificationKind::Info)
    }

    /// Shown after a product is added from its detail page.
    pub fn item_added(product_name: &str, quantity: u32) -> Self {
        Self::success(
            "Item Added!",
            format!("{product_name} (x{quantity}) has been added to cart."),
        )
    }

    /// Shown when adding to the cart without a session.
    pub fn login_required_to_add() -> Self {
        Self::warning(
            "Login Required",
            "Please log in or sign up to add items to your cart.",
        )
    }

    /// Shown when the product on the page no longer exists.
    pub fn product_not_found() -> Self {
        Self::error("Error", "Product not found!")
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added() {
        let n = Notification::item_added("Raw Honey", 2);
        assert_eq!(n.title, "Item Added!");
        assert_eq!(n.message, "Raw Honey (x2) has been added to cart.");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
    }
}
