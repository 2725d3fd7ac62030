use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xlsx_roster::cli;

#[derive(Parser)]
#[command(name = "xlsx-roster")]
#[command(about = "Read an Excel workforce roster into individual and company records.")]
#[command(long_about = "xlsx-roster - Excel workforce roster reader

Reads the first worksheet of a .xlsx roster. Each row after the header
block becomes an individual (first + last name) or a company (name + type),
and must carry a complete bank account (IBAN, BIC, holder).
Reading stops at the first row whose id is blank or zero.

COMMANDS:
  summary  - Print head counts and the names of every individual
  import   - Write the roster records to a YAML file

EXAMPLES:
  xlsx-roster summary staff.xlsx
  xlsx-roster import staff.xlsx staff.yaml --layout layout.yaml

LOGGING:
  RUST_LOG=xlsx_roster=debug xlsx-roster summary staff.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of the roster
    Summary {
        /// Path to the roster workbook (.xlsx)
        file: PathBuf,

        /// YAML file overriding column positions, header rows or marker
        #[arg(short, long, env = "ROSTER_LAYOUT")]
        layout: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Import the roster workbook into YAML
    Import {
        /// Path to the roster workbook (.xlsx)
        input: PathBuf,

        /// Output YAML file path
        output: PathBuf,

        /// YAML file overriding column positions, header rows or marker
        #[arg(short, long, env = "ROSTER_LAYOUT")]
        layout: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Summary { verbose, .. } | Commands::Import { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "xlsx_roster=info"
    } else {
        "xlsx_roster=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    match cli.command {
        Commands::Summary {
            file,
            layout,
            verbose,
        } => cli::summary(file.clone(), layout, verbose)
            .with_context(|| format!("Failed to summarize roster {}", file.display())),

        Commands::Import {
            input,
            output,
            layout,
            verbose,
        } => cli::import(input.clone(), output, layout, verbose)
            .with_context(|| format!("Failed to import roster {}", input.display())),
    }
}
