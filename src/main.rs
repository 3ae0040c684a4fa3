mod aggregate;
mod cli;
mod config;
mod demo;
mod error;
mod league;
mod loader;
mod rank;
mod report;
mod scoring;
mod types;

use crate::error::RankerError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DIAGNOSTICS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, RankerError> {
    match cli.command {
        cli::Commands::Rank(cmd) => {
            let loaded = config::load_config(&cmd.config_dir)?;
            let mut policy = loaded
                .as_ref()
                .map(|cfg| cfg.scoring_policy())
                .unwrap_or_default();
            if let Some(attacks) = cmd.attacks_per_member {
                policy.default_attacks_per_member = attacks;
            }
            let bonus_slots = cmd
                .bonus_slots
                .or_else(|| loaded.as_ref().and_then(|cfg| cfg.bonus_slots()));

            let league_data = loader::load_league(&cmd.input)?;
            let board = league::evaluate(&league_data, &policy, bonus_slots);
            info!(
                members = board.members.len(),
                rounds = board.stats.rounds_counted,
                "ranking complete"
            );

            let rendered = report::render(&board, output_format(&cmd.format))?;
            println!("{rendered}");

            if board.stats.has_diagnostics() {
                eprintln!(
                    "warning: {} war(s) not matched to clan, {} attack(s) dropped",
                    board.stats.rounds_unmatched, board.stats.dropped_attacks
                );
                Ok(exit_code::DIAGNOSTICS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Demo(cmd) => {
            let board = demo::demo_leaderboard(&Default::default(), cmd.bonus_slots);
            let rendered = report::render(&board, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Multipliers => {
            print!("{}", report::md::multiplier_table());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
