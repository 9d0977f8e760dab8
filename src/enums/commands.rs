use clap::Subcommand;
use crate::config::constants::{DEFAULT_CONFIG_FILE, DEFAULT_REPO_PATH};

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the git diff: secret rules first, then AI review
    Scan {
        #[clap(short, long, default_value = DEFAULT_REPO_PATH)]
        path: String,
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,
    },
    /// Write a starter policy document
    Init {
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,
    },
    /// Load and compile the policy document without scanning
    Validate {
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,
    },
}
