//! Domain entities: clients, their addresses, and their orders
//!
//! Everything here is immutable after load. Orders are appended to a
//! client only while the loader runs; the dataset is read-only for the
//! rest of the process lifetime.

mod address;
mod client;
mod order;

pub use address::Address;
pub use client::{Client, Gender};
pub use order::Order;
