//! PeopleDB CLI
//!
//! Command-line front end for a PeopleDB data file.
//!
//! # Commands
//!
//! - `add` - Append a person to the data file
//! - `remove` - Remove a person by position
//! - `list` - Print the table of records
//! - `sort` - Sort the data file by a field
//! - `chart` - Draw a text bar or pie chart
//! - `menu` - Interactive numbered menu (default)

mod commands;

use clap::{Parser, Subcommand};
use peopledb_core::{ChartField, ChartKind, SortField, SortOrder};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// PeopleDB person record tool.
#[derive(Parser)]
#[command(name = "peopledb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the data file
    #[arg(global = true, short, long)]
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a person to the data file
    Add {
        /// Person name, truncated to 49 characters
        name: String,

        /// Age in years (0 to 150)
        #[arg(allow_negative_numbers = true)]
        age: i32,

        /// Weight (0 to 200)
        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },

    /// Remove a person by 0-based position
    Remove {
        /// Position in the current order
        index: usize,
    },

    /// Print all records
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Sort the data file
    Sort {
        /// Field to sort by (name, age, weight)
        #[arg(short, long)]
        by: SortField,

        /// Sort order (asc, desc)
        #[arg(short, long, default_value = "asc")]
        order: SortOrder,

        /// Print the sorted table without saving
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Draw a chart of ages or weights
    Chart {
        /// Field to plot (age, weight)
        field: ChartField,

        /// Chart kind
        #[arg(short, long, default_value = "bar")]
        kind: ChartKind,
    },

    /// Interactive numbered menu
    Menu,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add { name, age, weight } => {
            let path = cli.file.ok_or("Data file required for add")?;
            commands::add::run(&path, &name, age, weight)?;
        }
        Commands::Remove { index } => {
            let path = cli.file.ok_or("Data file required for remove")?;
            commands::remove::run(&path, index)?;
        }
        Commands::List { format } => {
            let path = cli.file.ok_or("Data file required for list")?;
            commands::list::run(&path, &format)?;
        }
        Commands::Sort { by, order, dry_run } => {
            let path = cli.file.ok_or("Data file required for sort")?;
            commands::sort::run(&path, by, order, dry_run)?;
        }
        Commands::Chart { field, kind } => {
            let path = cli.file.ok_or("Data file required for chart")?;
            commands::chart::run(&path, field, kind)?;
        }
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            commands::menu::run(cli.file.as_deref(), stdin.lock(), stdout.lock())?;
        }
        Commands::Version => {
            println!("PeopleDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("PeopleDB Core v{}", peopledb_core::VERSION);
        }
    }

    Ok(())
}
