//! The nine analytical queries over the loaded client list
//!
//! Every operation is a pure, read-only scan; none mutate the dataset
//! and they can run in any order. Conditions where the data has the
//! wrong shape for a query (empty list, no matching group) surface as
//! [`QueryError`], distinct from load failures.

mod demographics;
mod spend;
mod state;

pub use demographics::{average_age, young_female_clients};
pub use spend::{
    any_clients_without_orders, any_zero_total_spenders, average_male_spend, biggest_spender,
    max_by_spend, ZERO_SPEND_EPSILON,
};
pub use state::{
    addresses_in_state, busiest_state, group_by_state, last_names_in_state, states_larger_than,
    top_spender_by_state,
};

use thiserror::Error;

/// Absent-result conditions: the dataset has the wrong shape for the
/// query, as opposed to a corrupt source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no clients loaded")]
    NoClients,

    #[error("no male clients in the dataset")]
    NoMaleClients,

    #[error("no clients in state {0}")]
    NoSuchState(String),
}
