//! Clientele - client and order analytics over delimited data files
//!
//! Loads client and order records from two headerless delimited files,
//! links orders to clients with a single cyclic round-robin cursor, and
//! answers nine fixed analytical questions over the loaded dataset.

pub mod cli;
pub mod domain;
pub mod query;
pub mod storage;

pub use domain::{Address, Client, Gender, Order};
