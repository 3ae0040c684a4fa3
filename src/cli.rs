use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cwl-ranker",
    version,
    about = "Clan War League performance ranking for fair bonus distribution"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank clan members from a league export file
    Rank(RankCommand),
    /// Rank the built-in sample clan
    Demo(DemoCommand),
    /// Print the townhall difference multiplier table
    Multipliers,
}

#[derive(Args)]
pub struct RankCommand {
    /// League export (JSON) with the clan roster and war details
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Directory holding cwl-ranker.toml and .cwl-ranker/local.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
    /// Expected attacks for rounds that do not state their own
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub attacks_per_member: Option<u32>,
    /// Mark the top N members as bonus recipients
    #[arg(long)]
    pub bonus_slots: Option<usize>,
}

#[derive(Args)]
pub struct DemoCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long)]
    pub bonus_slots: Option<usize>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
