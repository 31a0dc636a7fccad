use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cartera")]
#[command(about = "Track client follow-ups from a shared roster spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the roster (CLIENTES.csv or CLIENTES.tsv)
    #[arg(long, default_value = ".", global = true)]
    pub dir: PathBuf,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clients needing attention: no follow-up on file, or none recent
    Alerts {
        /// Limit the view to one salesperson (exact VENDEDOR match)
        #[arg(long)]
        vendedor: Option<String>,
    },

    /// Supervisor table of the roster
    Overview {
        /// Narrow to one salesperson ("Todos" keeps everyone)
        #[arg(long)]
        vendedor: Option<String>,
    },

    /// List the distinct salespeople found in the roster
    Vendedores,

    /// One client's contact card and WhatsApp link
    Show {
        /// Client display name (NOMBRE TERCERO, exact match)
        client: String,

        /// Message to embed in the WhatsApp link
        #[arg(long)]
        message: Option<String>,
    },

    /// Record a follow-up and save the roster
    Record {
        /// Client display name; every row with this name is updated
        client: String,

        /// Follow-up date being recorded (YYYY-MM-DD, default today)
        #[arg(long)]
        last: Option<NaiveDate>,

        /// Planned next follow-up (YYYY-MM-DD, default today plus the
        /// configured lead days)
        #[arg(long)]
        next: Option<NaiveDate>,
    },
}
