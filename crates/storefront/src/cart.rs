//! Shopping cart state and derived totals.
//!
//! The cart is a list of product-id/quantity lines serialized into the
//! visitor's session. A fresh session starts with the seeded demo cart.
//! Totals are derived on every render with decimal arithmetic; nothing is
//! persisted beyond the session store.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use lensvision_core::ProductId;

use crate::catalog::Catalog;

/// Orders above this subtotal ship free.
fn free_shipping_threshold() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// Flat shipping fee below the free-shipping threshold.
fn shipping_fee() -> Decimal {
    Decimal::new(999, 2)
}

/// Sales tax rate applied to the subtotal, in percent.
fn tax_rate_percent() -> Decimal {
    Decimal::new(8, 0)
}

/// Shipping charged for a given subtotal.
///
/// Free shipping requires the subtotal to be strictly above the threshold;
/// an order of exactly $100.00 still pays the flat fee.
fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        shipping_fee()
    }
}

/// A single cart line: a product reference plus quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

/// Totals derived from the cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    /// Zero when the subtotal qualifies for free shipping.
    pub shipping: Decimal,
    /// Tax on the subtotal, rounded to cents.
    pub tax: Decimal,
    pub total: Decimal,
    /// Amount still needed to reach free shipping; `None` once qualified.
    pub free_shipping_gap: Option<Decimal>,
}

impl Cart {
    /// The demo cart a fresh session starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            lines: vec![
                CartLine {
                    product_id: ProductId::new(1),
                    quantity: 1,
                },
                CartLine {
                    product_id: ProductId::new(2),
                    quantity: 2,
                },
            ],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines ("2 items in your cart").
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total unit count across lines (the header badge).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add one unit of a product, creating the line if needed.
    pub fn add(&mut self, product_id: ProductId) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity: 1,
            });
        }
    }

    /// Apply a signed quantity delta to a line.
    ///
    /// The quantity is clamped at zero and a line that reaches zero is
    /// removed. Unknown product IDs are ignored.
    pub fn adjust(&mut self, product_id: ProductId, delta: i32) {
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return;
        };

        let current = i64::from(line.quantity);
        let updated = (current + i64::from(delta)).max(0);
        line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);

        self.lines.retain(|l| l.quantity > 0);
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Derive the order summary from the cart contents.
    ///
    /// Lines referencing products that no longer exist in the catalog are
    /// skipped. Shipping is free strictly above the threshold; tax is a
    /// fixed percentage of the subtotal rounded to cents.
    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let subtotal: Decimal = self
            .lines
            .iter()
            .filter_map(|line| {
                catalog
                    .product(line.product_id)
                    .map(|product| product.price.amount * Decimal::from(line.quantity))
            })
            .sum();

        let shipping = shipping_for(subtotal);
        let qualifies = shipping.is_zero();

        let tax = (subtotal * tax_rate_percent() / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        CartTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            free_shipping_gap: (!qualifies).then(|| free_shipping_threshold() - subtotal),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::seed()
    }

    #[test]
    fn test_seeded_cart_contents() {
        let cart = Cart::seeded();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_seeded_cart_totals() {
        // 129.99 + 2 x 199.99 = 529.97; free shipping; 8% tax = 42.40
        let totals = Cart::seeded().totals(&catalog());
        assert_eq!(totals.subtotal, Decimal::new(52997, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::new(4240, 2));
        assert_eq!(totals.total, Decimal::new(57237, 2));
        assert!(totals.free_shipping_gap.is_none());
    }

    #[test]
    fn test_shipping_charged_at_threshold() {
        // A single Minimalist Wire ($89.99) stays under the threshold
        let cart = Cart {
            lines: vec![CartLine {
                product_id: ProductId::new(6),
                quantity: 1,
            }],
        };
        let totals = cart.totals(&catalog());
        assert_eq!(totals.shipping, Decimal::new(999, 2));
        assert_eq!(totals.free_shipping_gap, Some(Decimal::new(1001, 2)));

        // tax = 89.99 * 0.08 = 7.1992 -> 7.20
        assert_eq!(totals.tax, Decimal::new(720, 2));
        assert_eq!(totals.total, Decimal::new(10718, 2));
    }

    #[test]
    fn test_free_shipping_is_strictly_above_threshold() {
        assert_eq!(shipping_for(Decimal::new(10000, 2)), shipping_fee());
        assert_eq!(shipping_for(Decimal::new(10001, 2)), Decimal::ZERO);
        assert_eq!(shipping_for(Decimal::new(9999, 2)), shipping_fee());
    }

    #[test]
    fn test_adjust_increments_and_decrements() {
        let mut cart = Cart::seeded();
        cart.adjust(ProductId::new(1), 1);
        assert_eq!(cart.total_quantity(), 4);

        cart.adjust(ProductId::new(2), -1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_adjust_to_zero_removes_line() {
        let mut cart = Cart::seeded();
        cart.adjust(ProductId::new(1), -1);
        assert_eq!(cart.line_count(), 1);
        assert!(cart.lines.iter().all(|l| l.product_id != ProductId::new(1)));
    }

    #[test]
    fn test_adjust_clamps_below_zero() {
        let mut cart = Cart::seeded();
        cart.adjust(ProductId::new(1), -10);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_adjust_unknown_product_is_ignored() {
        let mut cart = Cart::seeded();
        cart.adjust(ProductId::new(99), 5);
        assert_eq!(cart, Cart::seeded());
    }

    #[test]
    fn test_add_new_and_existing_lines() {
        let mut cart = Cart::default();
        cart.add(ProductId::new(3));
        cart.add(ProductId::new(3));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::seeded();
        cart.remove(ProductId::new(2));
        assert_eq!(cart.line_count(), 1);

        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Cart::default().totals(&catalog());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, shipping_fee());
        assert_eq!(totals.tax, Decimal::ZERO);
    }

    #[test]
    fn test_totals_skip_dangling_lines() {
        let cart = Cart {
            lines: vec![
                CartLine {
                    product_id: ProductId::new(1),
                    quantity: 1,
                },
                CartLine {
                    product_id: ProductId::new(999),
                    quantity: 3,
                },
            ],
        };
        let totals = cart.totals(&catalog());
        assert_eq!(totals.subtotal, Decimal::new(12999, 2));
    }

    #[test]
    fn test_serde_roundtrip() {
        let cart = Cart::seeded();
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
