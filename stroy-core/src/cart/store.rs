//! Cart store
//!
//! One line per distinct id. Every mutation writes the full line list to the
//! `cart` slot before it becomes visible, so a failed write leaves both the
//! slot and the in-memory cart unchanged.

use super::money::{line_total, sum_totals, to_f64};
use crate::storage::{KeyValueStore, read_json_or_default, write_json};
use shared::{CartItem, CartItemInput, CatalogResult};
use std::sync::Arc;

/// Slot holding the serialized cart
pub const CART_KEY: &str = "cart";

pub struct CartStore {
    store: Arc<dyn KeyValueStore>,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Seed from the `cart` slot; absent or malformed contents give an empty cart
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut items: Vec<CartItem> = read_json_or_default(store.as_ref(), CART_KEY);

        let before = items.len();
        items.retain(|item| item.quantity > 0);
        if items.len() != before {
            tracing::warn!(dropped = before - items.len(), "Dropped stored cart lines with zero quantity");
        }

        tracing::debug!(lines = items.len(), "Cart loaded");
        Self { store, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit: bumps the quantity of an existing line, else appends one
    pub fn add_to_cart(&mut self, input: CartItemInput) -> CatalogResult<()> {
        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.id == input.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => next.push(input.into_line()),
        }
        self.commit(next)
    }

    /// Remove the whole line
    pub fn remove_from_cart(&mut self, id: &str) -> CatalogResult<()> {
        let next: Vec<CartItem> = self.items.iter().filter(|item| item.id != id).cloned().collect();
        self.commit(next)
    }

    /// Absolute set; `quantity <= 0` removes the line
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CatalogResult<()> {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let mut next = self.items.clone();
        match next.iter_mut().find(|item| item.id == id) {
            Some(line) => line.quantity = quantity,
            None => {
                tracing::debug!(id = %id, "Quantity update for a line not in the cart");
                return Ok(());
            }
        }
        self.commit(next)
    }

    pub fn clear_cart(&mut self) -> CatalogResult<()> {
        self.commit(Vec::new())
    }

    /// Sum of quantities
    pub fn items_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `retail_price * quantity`; lines without a retail price count as 0
    pub fn total(&self) -> f64 {
        to_f64(sum_totals(
            self.items
                .iter()
                .map(|item| line_total(item.retail_price, item.quantity)),
        ))
    }

    fn commit(&mut self, next: Vec<CartItem>) -> CatalogResult<()> {
        write_json(self.store.as_ref(), CART_KEY, &next)?;
        self.items = next;
        Ok(())
    }
}
