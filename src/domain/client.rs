//! Client domain model
//!
//! A client owns exactly one address and holds shared references to the
//! orders assigned during load.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::{Address, Order};

/// Gender as recorded in the client file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    OtherOrUnspecified,
}

impl Gender {
    /// Maps a raw gender code to a variant.
    ///
    /// Total mapping: `M`/`m` and `F`/`f` map to the named variants,
    /// any other code maps to [`Gender::OtherOrUnspecified`].
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("M") {
            Gender::Male
        } else if code.eq_ignore_ascii_case("F") {
            Gender::Female
        } else {
            Gender::OtherOrUnspecified
        }
    }

    /// Returns a display label for the gender
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::OtherOrUnspecified => "unspecified",
        }
    }
}

/// A client with identity, one owned address, and a purchase history.
///
/// Orders are shared references into the global order pool; the same
/// `Order` may appear under several clients once the assignment cursor
/// wraps. Orders are appended only during load.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub address: Address,
    pub orders: Vec<Rc<Order>>,
}

impl Client {
    /// Creates a client with no orders attached yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        gender: Gender,
        address: Address,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            gender,
            address,
            orders: Vec::new(),
        }
    }

    /// Attaches an order from the pool
    pub fn add_order(&mut self, order: Rc<Order>) {
        self.orders.push(order);
    }

    /// Sum of order totals, recomputed on demand (never cached).
    pub fn total_spend(&self) -> f64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) - {} - {} order(s) totaling {:.2}",
            self.full_name(),
            self.age,
            self.gender.label(),
            self.address,
            self.orders.len(),
            self.total_spend()
        )
    }
}
