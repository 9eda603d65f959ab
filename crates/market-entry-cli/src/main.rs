mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::decisions::{BulkScoreArgs, ConsistencyArgs, DecisionsArgs, GlobalScoreArgs};
use commands::profiles::ArchetypeArgs;
use commands::ranking::{RankingsArgs, SectorSummaryArgs, TopArgs};
use commands::simulator::{PlaybookArgs, SimulateArgs};

/// Market entry decision scoring and country ranking
#[derive(Parser)]
#[command(
    name = "mkt",
    version,
    about = "Market entry decision scoring and country ranking",
    long_about = "Scores a country on seven market-entry decisions, aggregates them into \
                  a global verdict, ranks countries for a sector, and simulates the \
                  supplementary metrics behind the strategic playbook. Inputs are JSON \
                  documents read from --input or piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a country on all seven decisions
    Decisions(DecisionsArgs),
    /// Weighted global score, verdict and recommendation
    GlobalScore(GlobalScoreArgs),
    /// Check the global score against the plain mean of the decisions
    Consistency(ConsistencyArgs),
    /// Global score for every country of a cohort, best first
    BulkScore(BulkScoreArgs),
    /// Rank a cohort of countries for a sector
    Rankings(RankingsArgs),
    /// Podium of the most suitable countries with their winning factor
    Top(TopArgs),
    /// Growth, import volume and top region over a sector cohort
    SectorSummary(SectorSummaryArgs),
    /// Simulate the eight supplementary metrics for a country
    Simulate(SimulateArgs),
    /// Seven strategic go-to-market calls for a country
    Playbook(PlaybookArgs),
    /// Resolve a sector to its archetype profile
    Archetype(ArchetypeArgs),
    /// List every sector archetype
    Archetypes,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Log to stderr, filtered by RUST_LOG (default warn).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Decisions(args) => commands::decisions::run_decisions(args),
        Commands::GlobalScore(args) => commands::decisions::run_global_score(args),
        Commands::Consistency(args) => commands::decisions::run_consistency(args),
        Commands::BulkScore(args) => commands::decisions::run_bulk_score(args),
        Commands::Rankings(args) => commands::ranking::run_rankings(args),
        Commands::Top(args) => commands::ranking::run_top(args),
        Commands::SectorSummary(args) => commands::ranking::run_sector_summary(args),
        Commands::Simulate(args) => commands::simulator::run_simulate(args),
        Commands::Playbook(args) => commands::simulator::run_playbook(args),
        Commands::Archetype(args) => commands::profiles::run_archetype(args),
        Commands::Archetypes => commands::profiles::run_archetypes(),
        Commands::Version => {
            println!("mkt {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
