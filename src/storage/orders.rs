//! Order file parsing and the cyclic assignment pool
//!
//! One record per line, two comma-separated fields: a semicolon-delimited
//! list of item identifiers and a decimal total. No header row.

use std::io::BufRead;
use std::rc::Rc;

use crate::domain::Order;

use super::LoadError;

/// Parses the order source into the raw order list, preserving line order.
///
/// A non-numeric total is a fatal [`LoadError`], never silently skipped.
/// Blank lines are ignored.
pub fn parse_orders(reader: impl BufRead) -> Result<Vec<Order>, LoadError> {
    let mut orders = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_num,
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        orders.push(parse_order_line(&line, line_num)?);
    }

    Ok(orders)
}

fn parse_order_line(line: &str, line_num: usize) -> Result<Order, LoadError> {
    let (items_field, total_field) = line.split_once(',').ok_or(LoadError::MissingFields {
        line: line_num,
        expected: 2,
        got: 1,
    })?;

    let total: f64 = total_field
        .trim()
        .parse()
        .map_err(|_| LoadError::InvalidNumber {
            line: line_num,
            field: "total",
            value: total_field.trim().to_string(),
        })?;

    // An empty sub-record means an order with zero items.
    let items: Vec<String> = items_field
        .split(';')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Order::new(items, total))
}

/// The parsed order pool plus the single assignment cursor.
///
/// The cursor is shared across the whole load and never reset between
/// clients: orders are handed out in sequence and the cursor wraps back
/// to the start once the pool is exhausted, so the same `Rc<Order>` may
/// end up attached to several clients.
#[derive(Debug)]
pub struct OrderPool {
    orders: Vec<Rc<Order>>,
    cursor: usize,
}

impl OrderPool {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: orders.into_iter().map(Rc::new).collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Current cursor position. After a full load this equals the total
    /// number of assignments mod the pool size.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Hands out the order under the cursor and advances it, wrapping at
    /// the end of the pool. Returns `None` on an empty pool; the caller
    /// decides whether that is an error.
    pub fn take(&mut self) -> Option<Rc<Order>> {
        let order = Rc::clone(self.orders.get(self.cursor)?);
        self.cursor = (self.cursor + 1) % self.orders.len();
        Some(order)
    }
}
