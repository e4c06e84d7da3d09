//! In-memory shopping cart and checkout thank-you data.
//!
//! Prices are integer cents. Checkout produces a confirmation and empties the
//! cart; there is no payment step and nothing is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price_cents: u64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price_cents,
            quantity,
        }
    }

    pub fn line_total_cents(&self) -> u64 {
        self.unit_price_cents.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Your cart is empty")]
    Empty,
}

/// Data shown on the thank-you page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub items: Vec<CartItem>,
    pub total_cents: u64,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
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

    /// Add an item; an item with the same id has its quantity increased
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Set an item's quantity; zero removes it
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.line_total_cents()))
    }

    pub fn checkout(&mut self) -> Result<OrderConfirmation, CartError> {
        if self.items.is_empty() {
            return Err(CartError::Empty);
        }
        let total_cents = self.subtotal_cents();
        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4(),
            items: std::mem::take(&mut self.items),
            total_cents,
            placed_at: Utc::now(),
        };
        log::info!(
            "Order {} placed: {} line(s), {}",
            confirmation.order_id,
            confirmation.items.len(),
            format_price(total_cents)
        );
        Ok(confirmation)
    }
}

/// Render cents as dollars, e.g. `$12.34`
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
