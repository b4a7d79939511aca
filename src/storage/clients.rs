//! Client file parsing and order assignment
//!
//! Ten comma-separated fields per line, in fixed order: firstName,
//! lastName, age, gender code, streetNumber, street, city, state, zip,
//! numOrders. No header row.

use std::io::BufRead;

use crate::domain::{Address, Client, Gender};

use super::orders::OrderPool;
use super::LoadError;

const CLIENT_FIELDS: usize = 10;

/// Parses the client source, attaching `numOrders` orders to each client
/// from the shared pool cursor.
///
/// The cursor in `pool` is threaded across the whole call: it is never
/// reset between clients, so later clients keep consuming where earlier
/// ones stopped and wrap around the pool once it is exhausted.
pub fn parse_clients(
    reader: impl BufRead,
    pool: &mut OrderPool,
) -> Result<Vec<Client>, LoadError> {
    let mut clients = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_num,
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        clients.push(parse_client_line(&line, line_num, pool)?);
    }

    Ok(clients)
}

fn parse_client_line(
    line: &str,
    line_num: usize,
    pool: &mut OrderPool,
) -> Result<Client, LoadError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < CLIENT_FIELDS {
        return Err(LoadError::MissingFields {
            line: line_num,
            expected: CLIENT_FIELDS,
            got: fields.len(),
        });
    }

    let age = parse_count(fields[2], "age", line_num)?;
    let num_orders = parse_count(fields[9], "order count", line_num)?;

    let address = Address::new(fields[4], fields[5], fields[6], fields[7], fields[8]);
    let mut client = Client::new(fields[0], fields[1], age, Gender::from_code(fields[3]), address);

    for _ in 0..num_orders {
        // An empty pool cannot satisfy any request; fail loudly rather
        // than attach nothing.
        let order = pool.take().ok_or(LoadError::EmptyOrderPool {
            line: line_num,
            requested: num_orders,
        })?;
        client.add_order(order);
    }

    Ok(client)
}

fn parse_count(raw: &str, field: &'static str, line: usize) -> Result<u32, LoadError> {
    raw.trim().parse().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: raw.trim().to_string(),
    })
}
