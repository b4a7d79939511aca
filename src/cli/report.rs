//! The report and sample commands
//!
//! `report` is the query runner: it loads the dataset once, then runs
//! the nine independent read-only analyses against it and prints the
//! results. `sample` mirrors the preamble of the original report tool
//! and just shows the first few loaded clients.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::Client;
use crate::query;
use crate::storage;

/// Runs all nine queries and prints the report.
pub fn report(output: &Output, client_file: &Path, order_file: &Path) -> Result<()> {
    let clients = storage::load_dataset(client_file, order_file)?;
    output.verbose_ctx("report", &format!("Loaded {} clients", clients.len()));

    // Query 1
    let average_age = query::average_age(&clients)?;
    // Query 2
    let young_female = query::young_female_clients(&clients);
    // Query 3, both formulations
    let without_orders = query::any_clients_without_orders(&clients);
    let zero_spenders = query::any_zero_total_spenders(&clients);
    // Query 4
    let biggest = query::biggest_spender(&clients)?;
    // Query 5
    let male_average = query::average_male_spend(&clients)?;
    // Query 6
    let ca_addresses = query::addresses_in_state(&clients, "CA");
    // Query 7, plus both derived reports
    let groups = query::group_by_state(&clients);
    let ca_last_names = query::last_names_in_state(&groups, "CA")?;
    let big_states = query::states_larger_than(&groups, 2);
    // Query 8
    let busiest = query::busiest_state(&groups)?;
    // Query 9
    let top_by_state = query::top_spender_by_state(&groups);
    let ca_top = top_by_state
        .get("CA")
        .copied()
        .ok_or_else(|| query::QueryError::NoSuchState("CA".to_string()))?;

    if output.is_json() {
        let top_names: BTreeMap<&str, String> = top_by_state
            .iter()
            .map(|(&state, client)| (state, client.full_name()))
            .collect();
        output.data(&serde_json::json!({
            "clients": clients.len(),
            "average_age": average_age,
            "young_female_clients": young_female,
            "any_clients_without_orders": without_orders,
            "any_zero_total_spenders": zero_spenders,
            "biggest_spender": {
                "name": biggest.full_name(),
                "total_spend": biggest.total_spend(),
            },
            "average_male_spend": male_average,
            "ca_addresses": ca_addresses,
            "ca_last_names": ca_last_names,
            "states_with_more_than_two_clients": big_states,
            "busiest_state": busiest,
            "top_spender_by_state": top_names,
            "ca_top_spender": ca_top.full_name(),
        }));
        return Ok(());
    }

    println!("Average age: {}", average_age);
    output.blank();

    println!("Female clients aged 18-25 ({}):", young_female.len());
    for client in &young_female {
        println!("  {}", client);
    }
    output.blank();

    println!("Any clients without orders: {}", without_orders);
    println!("Any clients with zero total spend: {}", zero_spenders);
    output.blank();

    println!(
        "Biggest spender: {} ({:.2})",
        biggest.full_name(),
        biggest.total_spend()
    );
    println!("Average spend, male clients: {:.2}", male_average);
    output.blank();

    println!("CA addresses ({}):", ca_addresses.len());
    for address in &ca_addresses {
        println!("  {}", address);
    }
    output.blank();

    println!("CA client last names:");
    for name in &ca_last_names {
        println!("  {}", name);
    }
    println!("States with more than 2 clients:");
    for state in &big_states {
        println!("  {}", state);
    }
    output.blank();

    println!(
        "State with the most clients: {} ({} clients)",
        busiest,
        groups[busiest].len()
    );
    output.blank();

    println!("Top spender per state:");
    for (state, client) in &top_by_state {
        println!(
            "  {}  {} ({:.2})",
            state,
            client.full_name(),
            client.total_spend()
        );
    }
    println!(
        "Top spender in CA: {} ({:.2})",
        ca_top.full_name(),
        ca_top.total_spend()
    );

    Ok(())
}

/// Prints the first `count` loaded clients.
pub fn sample(output: &Output, client_file: &Path, order_file: &Path, count: usize) -> Result<()> {
    let clients = storage::load_dataset(client_file, order_file)?;
    let shown: Vec<&Client> = clients.iter().take(count).collect();

    if output.is_json() {
        output.data(&shown);
    } else if shown.is_empty() {
        println!("No clients loaded.");
    } else {
        println!("Showing {} of {} clients:", shown.len(), clients.len());
        for client in &shown {
            println!("  {}", client);
        }
    }

    Ok(())
}
