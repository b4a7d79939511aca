//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::report;

#[derive(Parser)]
#[command(name = "clientele")]
#[command(author, version, about = "Client and order analytics over delimited data files")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input file locations, shared by every command
#[derive(Args)]
pub struct InputFiles {
    /// Client records file (ten comma-separated fields per line)
    #[arg(long, default_value = "ClientData.csv")]
    pub client_file: PathBuf,

    /// Order records file (item list and total per line)
    #[arg(long, default_value = "OrderData.csv")]
    pub order_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load both files and run the full analytical report
    Report {
        #[command(flatten)]
        input: InputFiles,
    },

    /// Load both files and print the first few clients
    Sample {
        #[command(flatten)]
        input: InputFiles,

        /// Number of clients to print
        #[arg(long, short = 'n', default_value = "5")]
        count: usize,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Report { input } => {
            output.verbose_ctx(
                "report",
                &format!(
                    "Loading clients from {} and orders from {}",
                    input.client_file.display(),
                    input.order_file.display()
                ),
            );
            report::report(&output, &input.client_file, &input.order_file)?
        }

        Commands::Sample { input, count } => {
            output.verbose_ctx("sample", &format!("Showing up to {} clients", count));
            report::sample(&output, &input.client_file, &input.order_file, count)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
