//! Per-state queries
//!
//! Grouping uses a `BTreeMap` so key iteration is deterministic across
//! runs; within a group, clients keep their list order.

use std::collections::BTreeMap;

use crate::domain::{Address, Client};

use super::spend::max_by_spend;
use super::QueryError;

/// Addresses of every client in the given state, exact case-sensitive
/// match, in list order.
pub fn addresses_in_state<'a>(clients: &'a [Client], state: &str) -> Vec<&'a Address> {
    clients
        .iter()
        .filter(|c| c.address.state == state)
        .map(|c| &c.address)
        .collect()
}

/// Partitions the client list by state. Every client lands in exactly
/// one group.
pub fn group_by_state(clients: &[Client]) -> BTreeMap<&str, Vec<&Client>> {
    let mut groups: BTreeMap<&str, Vec<&Client>> = BTreeMap::new();
    for client in clients {
        groups
            .entry(client.address.state.as_str())
            .or_default()
            .push(client);
    }
    groups
}

/// Last names of the clients grouped under the given state.
pub fn last_names_in_state<'a>(
    groups: &BTreeMap<&str, Vec<&'a Client>>,
    state: &str,
) -> Result<Vec<&'a str>, QueryError> {
    let group = groups
        .get(state)
        .ok_or_else(|| QueryError::NoSuchState(state.to_string()))?;
    Ok(group.iter().map(|c| c.last_name.as_str()).collect())
}

/// States whose group size exceeds the threshold, in key order.
pub fn states_larger_than<'a>(
    groups: &BTreeMap<&'a str, Vec<&Client>>,
    threshold: usize,
) -> Vec<&'a str> {
    groups
        .iter()
        .filter(|(_, group)| group.len() > threshold)
        .map(|(&state, _)| state)
        .collect()
}

/// The state with the most clients. Ties keep the first key in iteration
/// order.
pub fn busiest_state<'a>(
    groups: &BTreeMap<&'a str, Vec<&Client>>,
) -> Result<&'a str, QueryError> {
    let mut best: Option<(&str, usize)> = None;
    for (&state, group) in groups {
        match best {
            Some((_, size)) if group.len() <= size => {}
            _ => best = Some((state, group.len())),
        }
    }
    best.map(|(state, _)| state).ok_or(QueryError::NoClients)
}

/// The highest spender within each state group. Per-group tie-break as
/// in [`max_by_spend`].
pub fn top_spender_by_state<'a>(
    groups: &BTreeMap<&'a str, Vec<&'a Client>>,
) -> BTreeMap<&'a str, &'a Client> {
    groups
        .iter()
        .filter_map(|(&state, group)| {
            max_by_spend(group.iter().copied()).map(|client| (state, client))
        })
        .collect()
}
