use crate::config::{IdMode, StorageSettings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT: &str = ".farmgraph/store.json";

#[derive(Parser)]
#[command(name = "farmgraph")]
#[command(
    author,
    version,
    about = "A GraphQL data API for farm operations: users, farms, crops, livestock, sensors and equipment"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .farmgraph.yml by default)
    #[arg(long, global = true, env = "FARMGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new farmgraph project in the current directory
    Init {
        /// Length of the generated ID suffix
        #[arg(long, default_value_t = StorageSettings::default().id_length)]
        id_length: usize,

        /// How record IDs are generated
        #[arg(long, value_enum, default_value_t = IdMode::Random)]
        id_mode: IdMode,

        /// Snapshot file for persisted records, relative to the project root
        #[arg(long, default_value = DEFAULT_SNAPSHOT, conflicts_with = "memory_only")]
        snapshot: String,

        /// Keep records in memory only (lost when the process exits)
        #[arg(long)]
        memory_only: bool,
    },

    /// Start the GraphQL server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query or mutation and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL document (use '-' to read from stdin)
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
