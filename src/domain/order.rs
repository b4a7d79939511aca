//! Purchase orders

use serde::Serialize;

/// A single purchase: the ordered item identifiers and the monetary total.
///
/// Orders live in a shared pool during load and may end up referenced by
/// more than one client once the assignment cursor wraps around the pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Item identifiers in purchase order. May be empty.
    pub items: Vec<String>,
    /// Monetary total for the whole order.
    pub total: f64,
}

impl Order {
    pub fn new(items: Vec<String>, total: f64) -> Self {
        Self { items, total }
    }
}
