//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Interactive phonebook backed by SQLite")]
pub struct Cli {
    /// Path of the SQLite database file
    #[arg(long, global = true, env = "PHONEBOOK_DB")]
    pub db: Option<PathBuf>,

    /// Path of a TOML configuration file (defaults to ./phonebook.toml if present)
    #[arg(long, global = true, env = "PHONEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Give up after this many invalid answers to a single prompt
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Show the table and keep asking for new entries until Ctrl+C (default)
    Interactive,
    /// Print every stored entry and exit
    List,
    /// Add a single entry without prompting
    Add {
        #[arg(long, help = "Name of the person")]
        name: String,
        #[arg(long, help = "Phone number")]
        phone: String,
    },
}
