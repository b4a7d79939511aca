//! Loading the client and order files
//!
//! Two headerless delimited text files are read once at startup: the
//! order file (item list + total per line) and the client file (ten
//! fixed fields per line). Orders are parsed first into a pool, then
//! handed out to clients by a cyclic cursor as the client file is read.

mod clients;
mod orders;

pub use clients::parse_clients;
pub use orders::{parse_orders, OrderPool};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::Client;

/// Parse and assignment failures. Every variant names the offending line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: expected {expected} fields, got {got}")]
    MissingFields {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: client requests {requested} order(s) but the order pool is empty")]
    EmptyOrderPool { line: usize, requested: u32 },

    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Loads both sources and returns the populated client list.
///
/// The load is atomic: failure to open, read, or parse either source
/// fails the whole load rather than returning a partial list. File
/// handles are dropped on every exit path.
pub fn load_dataset(client_path: &Path, order_path: &Path) -> Result<Vec<Client>> {
    let order_file = File::open(order_path)
        .with_context(|| format!("Failed to open order file: {}", order_path.display()))?;
    let orders = parse_orders(BufReader::new(order_file))
        .with_context(|| format!("Failed to parse order file: {}", order_path.display()))?;

    let mut pool = OrderPool::new(orders);

    let client_file = File::open(client_path)
        .with_context(|| format!("Failed to open client file: {}", client_path.display()))?;
    let clients = parse_clients(BufReader::new(client_file), &mut pool)
        .with_context(|| format!("Failed to parse client file: {}", client_path.display()))?;

    Ok(clients)
}
