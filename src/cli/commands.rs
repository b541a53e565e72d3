use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version, about = "Two to-do lists, Work and Travel, kept in one JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the to-do store
    #[arg(long, global = true, env = "TODOS_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the to-dos of one category
    List {
        /// Category to show (work, travel)
        #[arg(value_name = "CATEGORY", default_value = "work")]
        category: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a to-do
    Add {
        /// To-do text
        text: String,

        /// Category to add to (work, travel)
        #[arg(long, short = 'c', default_value = "work")]
        category: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a to-do by ID
    Delete {
        /// To-do ID as shown by `list`
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
