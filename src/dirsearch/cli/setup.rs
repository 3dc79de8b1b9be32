use clap::{Parser, Subcommand};
use dirsearch::controller::Policy;
use std::path::PathBuf;

fn parse_policy(s: &str) -> Result<Policy, String> {
    s.parse::<Policy>().map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "dirsearch", bin_name = "dirsearch", version)]
#[command(about = "Find people in a directory by name", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory file to search (JSON array; defaults to the bundled sample)
    #[arg(long, global = true, env = "DIRSEARCH_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// When to search: "live" (while typing) or "submit" (on Enter)
    #[arg(long, global = true, value_name = "POLICY", value_parser = parse_policy)]
    pub policy: Option<Policy>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search by name and print the matching people
    #[command(alias = "s", display_order = 1)]
    Search {
        /// Only type the query; don't press Enter (matters for the submit policy)
        #[arg(long)]
        no_commit: bool,

        /// Query words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// List everyone in the directory
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show the details of one search result
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Position of the result (e.g. 1 or #1)
        index: String,

        /// Query words to search before picking the result
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Start an interactive search session (the default)
    #[command(alias = "i", display_order = 4)]
    Interactive,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (policy, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
