//! Spending queries
//!
//! Total spend is derived on demand from a client's orders; it is never
//! cached, and nothing here mutates the dataset.

use crate::domain::{Client, Gender};

use super::QueryError;

/// Tolerance for treating a summed total as zero.
pub const ZERO_SPEND_EPSILON: f64 = 0.0001;

/// True if any client has no orders at all.
pub fn any_clients_without_orders(clients: &[Client]) -> bool {
    clients.iter().any(|c| c.orders.is_empty())
}

/// True if any client's order totals sum to (within epsilon of) zero.
///
/// Agrees with [`any_clients_without_orders`] for well-formed data, but a
/// client whose non-empty orders sum to zero counts here and not there.
/// The two checks are reported separately, never merged.
pub fn any_zero_total_spenders(clients: &[Client]) -> bool {
    clients
        .iter()
        .any(|c| c.total_spend().abs() < ZERO_SPEND_EPSILON)
}

/// Stable maximum by total spend: the first client encountered whose
/// spend no later client exceeds. Ties keep the earlier client.
pub fn max_by_spend<'a, I>(clients: I) -> Option<&'a Client>
where
    I: IntoIterator<Item = &'a Client>,
{
    let mut best: Option<(&Client, f64)> = None;
    for client in clients {
        let spend = client.total_spend();
        match best {
            Some((_, best_spend)) if spend <= best_spend => {}
            _ => best = Some((client, spend)),
        }
    }
    best.map(|(client, _)| client)
}

/// The client with the highest total spend over the whole list.
pub fn biggest_spender(clients: &[Client]) -> Result<&Client, QueryError> {
    max_by_spend(clients).ok_or(QueryError::NoClients)
}

/// Mean total spend over male clients. Clients who spent nothing still
/// count in the denominator.
pub fn average_male_spend(clients: &[Client]) -> Result<f64, QueryError> {
    let mut count: u32 = 0;
    let mut sum = 0.0;
    for client in clients.iter().filter(|c| c.gender == Gender::Male) {
        count += 1;
        sum += client.total_spend();
    }

    if count == 0 {
        return Err(QueryError::NoMaleClients);
    }
    Ok(sum / f64::from(count))
}
