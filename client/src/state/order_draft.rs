//! Order being composed on the orders page before submission.
//!
//! DESIGN
//! ======
//! Lines are keyed by product id and kept in insertion order. Quantities
//! are always >= 1; setting a lower quantity removes the line. Prices are
//! only used for the on-screen estimate; the server computes the real total.

#[cfg(test)]
#[path = "order_draft_test.rs"]
mod order_draft_test;

use crate::net::types::{OrderInput, OrderItemInput, Product};

/// Message shown when submitting an empty draft.
pub const EMPTY_DRAFT_MESSAGE: &str = "Add at least one product";

/// One selected product and its quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Products selected for a new order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl OrderDraft {
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// Add one unit of `product_id`, creating the line if needed.
    pub fn add(&mut self, product_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(DraftLine { product_id: product_id.to_owned(), quantity: 1 });
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set the quantity of an existing line; anything below 1 removes it.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity < 1 {
                self.remove(product_id);
            }
            return;
        };
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over lines whose product is known.
    pub fn estimated_total(&self, products: &[Product]) -> f64 {
        self.lines
            .iter()
            .filter_map(|line| {
                products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| p.price * f64::from(line.quantity))
            })
            .sum()
    }

    /// Mutation input for `createOrder`.
    ///
    /// # Errors
    ///
    /// Returns [`EMPTY_DRAFT_MESSAGE`] when no product is selected.
    pub fn to_input(&self) -> Result<OrderInput, &'static str> {
        if self.lines.is_empty() {
            return Err(EMPTY_DRAFT_MESSAGE);
        }
        let items = self
            .lines
            .iter()
            .map(|l| OrderItemInput { product_id: l.product_id.clone(), quantity: l.quantity })
            .collect();
        Ok(OrderInput { items })
    }
}
