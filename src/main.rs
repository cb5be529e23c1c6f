//! Command line entry point for the AimForge skill engine
//!
//! Reads player statistics or score histories as JSON from a file or stdin
//! and writes the computed metrics as JSON to stdout.

use aimforge::config::AppConfig;
use aimforge::{PlayerStats, ReportRequest, SkillEngine, SkillEngineError};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// AimForge - skill profile, rank projection and trend analysis
#[derive(Parser)]
#[command(
    name = "aimforge",
    version,
    about = "Compute skill metrics from competitive shooter statistics",
    long_about = "AimForge blends headshot rate, K/D, damage per round, win rate and \
                 consistency into a weighted Game Skill Index, projects the days until \
                 the next rank threshold, and classifies the trend of a score history."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pretty: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without computing anything")]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate aim, impact, consistency and GSI from player stats
    Profile {
        /// Player stats JSON file, `-` or omitted for stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Project the next rank target and days to reach it
    Project {
        /// Player stats JSON file, `-` or omitted for stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Use this GSI instead of the one calculated from the stats
        #[arg(long, value_name = "VALUE")]
        gsi: Option<f64>,
    },
    /// Classify the trend of a JSON array of scores
    Trend {
        /// Score history JSON file, `-` or omitted for stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Compute profile, projection and optional trend in one pass
    Report {
        /// Report request JSON file (`{"stats": {...}, "history": [...]}`)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if args.pretty {
        config.output.pretty = true;
    }

    aimforge::config::validate_config(&config)?;
    Ok(config)
}

/// Read the whole input from a file, or stdin for `None` / `-`
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn parse_input<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        SkillEngineError::InvalidInput {
            reason: e.to_string(),
        }
        .into()
    })
}

fn write_output<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn run(command: Command, engine: &SkillEngine, pretty: bool) -> Result<()> {
    match command {
        Command::Profile { input } => {
            let stats: PlayerStats = parse_input(input.as_deref())?;
            write_output(&engine.calculate_skill_profile(&stats), pretty)
        }
        Command::Project { input, gsi } => {
            let stats: PlayerStats = parse_input(input.as_deref())?;
            let mut profile = engine.calculate_skill_profile(&stats);
            if let Some(gsi) = gsi {
                profile.gsi = gsi;
            }
            write_output(&engine.project_rank(&stats, &profile), pretty)
        }
        Command::Trend { input } => {
            let history: Vec<f64> = parse_input(input.as_deref())?;
            write_output(&engine.analyze_trend(&history), pretty)
        }
        Command::Report { input } => {
            let request: ReportRequest = parse_input(input.as_deref())?;
            let report = engine.build_report(&request.stats, request.history.as_deref());
            write_output(&report, pretty)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let engine = match SkillEngine::new(config.scoring.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to build skill engine: {:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!(service = %config.service.name, "Configuration validation successful");
        return Ok(());
    }

    let Some(command) = args.command else {
        error!("No command given; see --help");
        std::process::exit(2);
    };

    if let Err(e) = run(command, &engine, config.output.pretty) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
