use crate::export::ExportFormat;
use crate::models::{SortDirection, SortKey};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for workhistory
#[derive(Parser)]
#[command(
    name = "workhistory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse recorded work shifts, total the hours and export a PDF report",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the work history JSON file
    #[arg(global = true, long = "history", value_name = "FILE")]
    pub history: Option<String>,

    /// Override the account details JSON file
    #[arg(global = true, long = "account", value_name = "FILE")]
    pub account: Option<String>,

    /// Override the user whose history is loaded
    #[arg(global = true, long = "user", value_name = "ID")]
    pub user: Option<String>,

    /// Override where the session token is stored
    #[arg(global = true, long = "token-file", value_name = "FILE")]
    pub token_file: Option<String>,

    /// Current time as RFC 3339 (used for the rolling window)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (configuration file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sorting and date range shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    #[arg(long, value_enum, help = "Sort key (default from config)")]
    pub sort: Option<SortKey>,

    #[arg(long = "dir", value_enum, help = "Sort direction")]
    pub direction: Option<SortDirection>,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        requires = "to",
        help = "Start of a custom range (replaces the last-7-days window)"
    )]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", requires = "from", help = "End of a custom range")]
    pub to: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Store the session token
    Login {
        #[arg(long, value_name = "TOKEN")]
        token: String,
    },

    /// Clear the session token
    Logout,

    /// Show work history with total worked time
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Export the work history (PDF report, CSV or JSON)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (required for csv/json)")]
        file: Option<String>,

        #[arg(long = "out-dir", value_name = "DIR", help = "Directory for the PDF report")]
        out_dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing files without asking")]
        force: bool,

        #[command(flatten)]
        view: ViewArgs,
    },
}
