//! Age and gender queries

use crate::domain::{Client, Gender};

use super::QueryError;

/// Arithmetic mean of client ages over the whole list.
pub fn average_age(clients: &[Client]) -> Result<f64, QueryError> {
    if clients.is_empty() {
        return Err(QueryError::NoClients);
    }
    let sum: u64 = clients.iter().map(|c| u64::from(c.age)).sum();
    Ok(sum as f64 / clients.len() as f64)
}

/// Female clients aged 18 through 25, both ends inclusive, in list order.
pub fn young_female_clients(clients: &[Client]) -> Vec<&Client> {
    clients
        .iter()
        .filter(|c| c.gender == Gender::Female && (18..=25).contains(&c.age))
        .collect()
}
