//! CLI module for the commodity market service
//!
//! - `serve`: run the HTTP API (default)
//! - `check-seed`: validate a seed file without starting the server

pub mod check_seed;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Commodity market - catalog, ratings, comments and credit over HTTP
#[derive(Parser)]
#[command(name = "commodity-market")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Parse a seed file and report what it contains
    CheckSeed {
        /// Path to the JSON seed document
        path: PathBuf,
    },
}
