use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "opsguard")]
#[clap(about = "Security gate for git diffs: secret rules first, AI review second", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
