//! Command-line interface
//!
//! Two commands over the same loaded dataset:
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `report` | Run all nine analytical queries and print the report |
//! | `sample` | Print the first few loaded clients |
//!
//! Both support `--format {text,json}` and `--verbose`, and take
//! `--client-file` / `--order-file` overrides for the default
//! `ClientData.csv` / `OrderData.csv` filenames.
//!
//! Call [`run()`] to parse arguments and execute the command.

mod app;
mod output;
mod report;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
