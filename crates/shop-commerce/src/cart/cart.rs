//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// One product entry in the cart.
///
/// Serialized with the storefront's record field names
/// (`id`, `name`, `price`, `image`, `quantity`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    /// Product this line refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    #[serde(rename = "price", with = "money::as_decimal")]
    pub unit_price: Money,
    /// Image path or URL.
    #[serde(rename = "image", default)]
    pub image_ref: String,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// Create a line for `quantity` units of `product`.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image_ref: product.image.clone(),
            quantity: quantity.clamp(1, MAX_QUANTITY_PER_ITEM),
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// The index did not name a line.
    OutOfBounds,
    /// The line already had the requested (clamped) quantity.
    Unchanged,
    /// The line's quantity changed.
    Updated {
        /// Quantity before the change.
        from: u32,
        /// Quantity after the change.
        to: u32,
    },
    /// The line was deleted.
    Removed(CartLineItem),
}

impl QuantityChange {
    /// Whether the cart was modified.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Updated { .. } | Self::Removed(_))
    }
}

/// An ordered list of line items, unique by product id.
///
/// Serializes as a bare JSON array of line items. Deserializing normalizes
/// the stored data: malformed lines and lines with a quantity below 1 are
/// dropped, and repeated product ids are merged into their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<StoredLine>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from line items, merging duplicates and capping
    /// quantities.
    pub fn from_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(item.product_id) {
                Some(index) => {
                    let line = &mut cart.items[index];
                    line.quantity = capped_sum(line.quantity, item.quantity);
                }
                None => cart.items.push(CartLineItem {
                    quantity: item.quantity.min(MAX_QUANTITY_PER_ITEM),
                    ..item
                }),
            }
        }
        cart
    }

    /// The line items in order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line at `index`.
    pub fn get(&self, index: usize) -> Option<&CartLineItem> {
        self.items.get(index)
    }

    /// Index of the line for `product_id`.
    pub fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }

    /// Add `quantity` units of `product`, appending a new line or growing
    /// the existing one. Returns the line's new quantity, or `None` when
    /// `quantity` is 0.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Option<u32> {
        if quantity == 0 {
            return None;
        }
        match self.position(product.id) {
            Some(index) => {
                let line = &mut self.items[index];
                line.quantity = capped_sum(line.quantity, quantity);
                Some(line.quantity)
            }
            None => {
                let line = CartLineItem::from_product(product, quantity);
                let quantity = line.quantity;
                self.items.push(line);
                Some(quantity)
            }
        }
    }

    /// Set the quantity of the line at `index`.
    ///
    /// With `allow_remove_to_zero`, a quantity of 0 or less deletes the line.
    /// Otherwise the quantity is clamped to `1..=MAX_QUANTITY_PER_ITEM`, so a
    /// line never drops below 1.
    pub fn set_quantity(
        &mut self,
        index: usize,
        new_quantity: i64,
        allow_remove_to_zero: bool,
    ) -> QuantityChange {
        if index >= self.items.len() {
            return QuantityChange::OutOfBounds;
        }
        if allow_remove_to_zero && new_quantity <= 0 {
            return QuantityChange::Removed(self.items.remove(index));
        }

        let to = u32::try_from(new_quantity.clamp(1, i64::from(MAX_QUANTITY_PER_ITEM)))
            .unwrap_or(MAX_QUANTITY_PER_ITEM);
        let line = &mut self.items[index];
        let from = line.quantity;
        if from == to {
            return QuantityChange::Unchanged;
        }
        line.quantity = to;
        QuantityChange::Updated { from, to }
    }

    /// Delete the line at `index`.
    pub fn remove(&mut self, index: usize) -> Option<CartLineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexes of lines whose name contains `query`, ignoring case.
    /// An empty query matches every line.
    pub fn matching(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect()
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

fn capped_sum(a: u32, b: u32) -> u32 {
    a.saturating_add(b).min(MAX_QUANTITY_PER_ITEM)
}

/// Line item as found in storage, before normalization. Quantities may be
/// zero or negative there.
#[derive(Deserialize)]
struct StoredLineItem {
    id: ProductId,
    #[serde(default)]
    name: String,
    #[serde(with = "money::as_decimal")]
    price: Money,
    #[serde(default)]
    image: String,
    #[serde(default)]
    quantity: i64,
}

/// One array element of the stored cart. Anything that does not decode as a
/// line item is kept as `Malformed` so the rest of the record survives.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLine {
    Item(StoredLineItem),
    Malformed(IgnoredAny),
}

impl From<Vec<StoredLine>> for Cart {
    fn from(stored: Vec<StoredLine>) -> Self {
        Cart::from_items(stored.into_iter().enumerate().filter_map(|(index, line)| {
            let s = match line {
                StoredLine::Item(item) => item,
                StoredLine::Malformed(_) => {
                    warn!(index, "Dropping malformed cart line");
                    return None;
                }
            };
            let quantity = u32::try_from(s.quantity.clamp(0, i64::from(MAX_QUANTITY_PER_ITEM))).ok()?;
            Some(CartLineItem {
                product_id: s.id,
                name: s.name,
                unit_price: s.price,
                image_ref: s.image,
                quantity,
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: u64, name: &str, cents: i64) -> Product {
        Product::new(id, name, Money::new(cents, Currency::PHP), "pantry")
    }

    #[test]
    fn test_add_product_merges_lines() {
        let honey = product(1, "Raw Honey", 35000);
        let mut cart = Cart::new();

        assert_eq!(cart.add_product(&honey, 2), Some(2));
        assert_eq!(cart.add_product(&honey, 3), Some(5));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(&product(1, "Oats", 100), 0), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_saturates_at_max() {
        let oats = product(1, "Oats", 100);
        let mut cart = Cart::new();
        cart.add_product(&oats, MAX_QUANTITY_PER_ITEM);
        assert_eq!(cart.add_product(&oats, 5), Some(MAX_QUANTITY_PER_ITEM));
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "Oats", 100), 2);

        assert_eq!(
            cart.set_quantity(0, 0, false),
            QuantityChange::Updated { from: 2, to: 1 }
        );
        assert_eq!(cart.set_quantity(0, -4, false), QuantityChange::Unchanged);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_set_quantity_removes_when_allowed() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "Oats", 100), 2);

        let change = cart.set_quantity(0, 0, true);
        assert!(matches!(change, QuantityChange::Removed(ref line) if line.name == "Oats"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_out_of_bounds() {
        let mut cart = Cart::new();
        assert_eq!(cart.set_quantity(3, 2, false), QuantityChange::OutOfBounds);
        assert!(!cart.set_quantity(3, 2, false).changed());
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new();
        let mut honey = product(7, "Raw Honey", 35050);
        honey.image = "honey.jpg".to_string();
        cart.add_product(&honey, 2);

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":7,"name":"Raw Honey","price":350.5,"image":"honey.jpg","quantity":2}]"#
        );
    }

    #[test]
    fn test_deserialize_normalizes() {
        let json = r#"[
            {"id": 1, "name": "Oats", "price": 1, "image": "", "quantity": 2},
            {"id": 2, "name": "Tea", "price": 2, "image": "", "quantity": 0},
            {"id": 1, "name": "Oats", "price": 1, "image": "", "quantity": 3},
            {"id": 3, "name": "Rice", "price": 3, "quantity": -1}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_deserialize_drops_only_malformed_lines() {
        let json = r#"[
            {"id": 1, "name": "Oats", "price": 120.5, "quantity": 2},
            {"id": 2, "name": "Tea", "quantity": 1},
            {"id": 3, "name": "Rice", "price": -4, "quantity": 1},
            "junk",
            {"id": 4, "name": "Honey", "price": 350, "quantity": 1}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        let ids: Vec<_> = cart.items().iter().map(|line| line.product_id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(4)]);
        assert_eq!(cart.items()[0].unit_price, Money::new(12050, Currency::PHP));
    }

    #[test]
    fn test_matching() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "Rolled Oats", 100), 1);
        cart.add_product(&product(2, "Green Tea", 100), 1);

        assert_eq!(cart.matching("OATS"), vec![0]);
        assert_eq!(cart.matching(""), vec![0, 1]);
        assert!(cart.matching("coffee").is_empty());
    }

    #[test]
    fn test_line_total() {
        let line = CartLineItem::from_product(&product(1, "Oats", 12050), 3);
        assert_eq!(line.line_total(), Money::new(36150, Currency::PHP));
    }
}
