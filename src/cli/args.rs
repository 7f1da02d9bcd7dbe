//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Food stock manager: sorted inventory, cost/value totals and order checks
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Explicit config file, layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stock in name order
    Show {
        /// Stock file (default: settings.stock_file)
        #[arg(value_hint = ValueHint::FilePath)]
        stock: Option<PathBuf>,
    },

    /// Print item count, wholesale cost and retail value
    Totals {
        /// Stock file (default: settings.stock_file)
        #[arg(value_hint = ValueHint::FilePath)]
        stock: Option<PathBuf>,
    },

    /// Check whether an order can be filled from stock
    Check {
        /// Order file
        #[arg(value_hint = ValueHint::FilePath)]
        order: PathBuf,
        /// Stock file (default: settings.stock_file)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        stock: Option<PathBuf>,
    },

    /// Fill an order and show what stock would remain (stock file is not rewritten)
    Fulfil {
        /// Order file
        #[arg(value_hint = ValueHint::FilePath)]
        order: PathBuf,
        /// Stock file (default: settings.stock_file)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        stock: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show config file locations
    Path,
}
