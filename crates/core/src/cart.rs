//! In-memory poster cart.
//!
//! Line items are keyed by a client-side uuid. Adding the same creation in
//! the same size twice bumps the quantity of the existing line instead of
//! creating a new one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{Cents, RemoteId};

/// Maximum quantity per line item.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Maximum unit price accepted for a line item (100 000.00).
pub const MAX_UNIT_PRICE_CENTS: Cents = 10_000_000;

/// Printable poster sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosterSize {
    A4,
    A3,
    A2,
    A1,
}

/// Fields supplied when adding a poster to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCartItem {
    pub creation_id: RemoteId,
    pub style_id: String,
    pub title: String,
    pub image_url: String,
    pub size: PosterSize,
    pub quantity: u32,
    pub unit_price_cents: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub id: Uuid,
    pub creation_id: RemoteId,
    pub style_id: String,
    pub title: String,
    pub image_url: String,
    pub size: PosterSize,
    pub quantity: u32,
    pub unit_price_cents: Cents,
}

impl CartItem {
    /// Saturates instead of overflowing for lines built outside [`Cart::add`].
    pub fn line_total_cents(&self) -> Cents {
        self.unit_price_cents.saturating_mul(Cents::from(self.quantity))
    }
}

/// Ordered list of cart lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a poster, merging with an existing line for the same creation
    /// and size. Returns the id of the affected line.
    pub fn add(&mut self, item: NewCartItem) -> Result<Uuid, CoreError> {
        validate_quantity(item.quantity)?;
        if item.quantity == 0 {
            return Err(CoreError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        validate_unit_price(item.unit_price_cents)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.creation_id == item.creation_id && line.size == item.size)
        {
            let merged = existing.quantity + item.quantity;
            validate_quantity(merged)?;
            existing.quantity = merged;
            return Ok(existing.id);
        }

        let id = Uuid::new_v4();
        self.items.push(CartItem {
            id,
            creation_id: item.creation_id,
            style_id: item.style_id,
            title: item.title,
            image_url: item.image_url,
            size: item.size,
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
        });
        Ok(id)
    }

    /// Remove a line. Returns the removed line.
    pub fn remove(&mut self, id: Uuid) -> Result<CartItem, CoreError> {
        let position = self.position(id)?;
        Ok(self.items.remove(position))
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, id: Uuid, quantity: u32) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        let position = self.position(id)?;
        if quantity == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = quantity;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of posters across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal_cents(&self) -> Cents {
        self.items
            .iter()
            .map(CartItem::line_total_cents)
            .fold(0, Cents::saturating_add)
    }

    fn position(&self, id: Uuid) -> Result<usize, CoreError> {
        self.items
            .iter()
            .position(|line| line.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "CartItem",
                id: id.to_string(),
            })
    }
}

fn validate_quantity(quantity: u32) -> Result<(), CoreError> {
    if quantity > MAX_LINE_QUANTITY {
        return Err(CoreError::Validation(format!(
            "Quantity exceeds maximum of {MAX_LINE_QUANTITY} (got {quantity})"
        )));
    }
    Ok(())
}

fn validate_unit_price(unit_price_cents: Cents) -> Result<(), CoreError> {
    if !(0..=MAX_UNIT_PRICE_CENTS).contains(&unit_price_cents) {
        return Err(CoreError::Validation(format!(
            "Unit price must be between 0 and {MAX_UNIT_PRICE_CENTS} cents (got {unit_price_cents})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn poster(creation_id: &str, size: PosterSize, quantity: u32) -> NewCartItem {
        NewCartItem {
            creation_id: creation_id.to_string(),
            style_id: "popart".to_string(),
            title: "Dog in Pop Art".to_string(),
            image_url: "https://cdn.example.com/c1.png".to_string(),
            size,
            quantity,
            unit_price_cents: 2_500,
        }
    }

    #[test]
    fn add_and_total() {
        let mut cart = Cart::new();
        cart.add(poster("c1", PosterSize::A3, 2)).unwrap();
        cart.add(poster("c2", PosterSize::A2, 1)).unwrap();
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal_cents(), 7_500);
    }

    #[test]
    fn same_creation_and_size_merges() {
        let mut cart = Cart::new();
        let first = cart.add(poster("c1", PosterSize::A3, 1)).unwrap();
        let second = cart.add(poster("c1", PosterSize::A3, 2)).unwrap();
        assert_eq!(first, second);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn different_size_is_separate_line() {
        let mut cart = Cart::new();
        cart.add(poster("c1", PosterSize::A3, 1)).unwrap();
        cart.add(poster("c1", PosterSize::A1, 1)).unwrap();
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn zero_quantity_add_rejected() {
        let mut cart = Cart::new();
        let err = cart.add(poster("c1", PosterSize::A4, 0)).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn merge_over_limit_rejected() {
        let mut cart = Cart::new();
        cart.add(poster("c1", PosterSize::A4, 90)).unwrap();
        let err = cart.add(poster("c1", PosterSize::A4, 10)).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
        assert_eq!(cart.items()[0].quantity, 90);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let id = cart.add(poster("c1", PosterSize::A4, 1)).unwrap();
        cart.set_quantity(id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_unknown_line_is_not_found() {
        let mut cart = Cart::new();
        let err = cart.remove(Uuid::new_v4()).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "CartItem", .. });
    }

    #[test]
    fn oversized_unit_price_rejected() {
        let mut cart = Cart::new();
        let item = NewCartItem {
            unit_price_cents: i64::MAX / 2 + 1,
            ..poster("c1", PosterSize::A1, 2)
        };
        let err = cart.add(item).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg.contains("between 0 and"));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn negative_unit_price_rejected() {
        let mut cart = Cart::new();
        let item = NewCartItem {
            unit_price_cents: -1,
            ..poster("c1", PosterSize::A4, 1)
        };
        assert_matches!(cart.add(item), Err(CoreError::Validation(_)));
    }

    #[test]
    fn max_price_lines_total_without_overflow() {
        let mut cart = Cart::new();
        for i in 0..10 {
            let item = NewCartItem {
                unit_price_cents: MAX_UNIT_PRICE_CENTS,
                ..poster(&format!("c{i}"), PosterSize::A1, MAX_LINE_QUANTITY)
            };
            cart.add(item).unwrap();
        }
        assert_eq!(
            cart.subtotal_cents(),
            10 * MAX_UNIT_PRICE_CENTS * Cents::from(MAX_LINE_QUANTITY)
        );
    }

    #[test]
    fn line_total_saturates() {
        let line = CartItem {
            id: Uuid::new_v4(),
            creation_id: "c1".to_string(),
            style_id: "popart".to_string(),
            title: "Dog in Pop Art".to_string(),
            image_url: "https://cdn.example.com/c1.png".to_string(),
            size: PosterSize::A1,
            quantity: 2,
            unit_price_cents: i64::MAX / 2 + 1,
        };
        assert_eq!(line.line_total_cents(), Cents::MAX);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(poster("c1", PosterSize::A4, 1)).unwrap();
        cart.clear();
        assert_eq!(cart.subtotal_cents(), 0);
        assert!(cart.is_empty());
    }
}
