//! SORA CLI - JARUS SORA 2.5 risk classification

// Global invariants enforced:
// - Reports go to stdout; notices and logs go to stderr
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use sora_core::config::{self, ResolvedConfig};
use sora_core::containment::adjacent_area_distance;
use sora_core::findings::evaluate_findings;
use sora_core::report::{
    render_findings_text, render_grc_table, render_oso_table, render_sail_table,
};
use sora_core::{evaluate, load_assessment, render_json, render_text, ReportFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sora")]
#[command(about = "JARUS SORA 2.5 ground and air risk classification")]
#[command(version = env!("SORA_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an operation described by an assessment JSON file
    Assess {
        /// Path to assessment JSON file
        path: PathBuf,

        /// Output format (overrides config file)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Evaluate findings and exit non-zero on blocking failures
        #[arg(long)]
        findings: bool,
    },
    /// Print the reference tables
    Tables {
        /// Table to print (default: all)
        table: Option<TableKind>,
    },
    /// Adjacent area distance for a UA maximum speed
    Distance {
        /// Maximum speed in m/s
        max_speed: f64,
    },
    /// Validate or show configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an assessment
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TableKind {
    Grc,
    Sail,
    Oso,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            path,
            format,
            config: config_path,
            findings,
        } => {
            let project_root = std::env::current_dir()?;
            let resolved_config = config::load_and_resolve(&project_root, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(config_path) = &resolved_config.config_path {
                eprintln!("Using config: {}", config_path.display());
            }

            // CLI flag overrides config file value
            let effective_format = format.map(ReportFormat::from).unwrap_or(resolved_config.format);

            tracing::debug!(path = %path.display(), "loading assessment");
            let assessment = load_assessment(&path)?;
            let outcome = evaluate(&assessment);

            if !findings {
                let summary = match outcome {
                    Ok(summary) => summary,
                    Err(e) => {
                        eprintln!("Assessment invalid: {}", e);
                        std::process::exit(1);
                    }
                };
                match effective_format {
                    ReportFormat::Text => {
                        print!("{}", render_text(&summary, resolved_config.show_optional_osos))
                    }
                    ReportFormat::Json => println!("{}", render_json(&summary)),
                }
                return Ok(());
            }

            let results = evaluate_findings(&assessment, &outcome, &resolved_config);
            match effective_format {
                ReportFormat::Text => {
                    if let Ok(ref summary) = outcome {
                        print!("{}", render_text(summary, resolved_config.show_optional_osos));
                        println!();
                    }
                    print!("{}", render_findings_text(&results));
                }
                ReportFormat::Json => {
                    let output = serde_json::json!({
                        "summary": outcome.as_ref().ok(),
                        "findings": &results,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }

            if results.has_blocking_failures() {
                std::process::exit(1);
            }
        }
        Commands::Tables { table } => match table {
            Some(TableKind::Grc) => print!("{}", render_grc_table()),
            Some(TableKind::Sail) => print!("{}", render_sail_table()),
            Some(TableKind::Oso) => print!("{}", render_oso_table()),
            None => {
                println!("Intrinsic GRC:");
                print!("{}", render_grc_table());
                println!();
                println!("SAIL:");
                print!("{}", render_sail_table());
                println!();
                println!("OSO requirements:");
                print!("{}", render_oso_table());
            }
        },
        Commands::Distance { max_speed } => {
            if !max_speed.is_finite() || max_speed < 0.0 {
                anyhow::bail!(
                    "max speed must be a non-negative number of m/s (got {})",
                    max_speed
                );
            }
            println!("{:.0} m", adjacent_area_distance(max_speed));
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                match config::load_and_resolve(&project_root, path.as_deref()) {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                print_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Route tracing output to stderr, filtered by `SORA_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("SORA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Findings:");
    println!("  oso_gaps_blocking: {}", resolved.oso_gaps_blocking);
    println!("  require_evidence: {}", resolved.require_evidence);
    println!("  evidence_min_length: {}", resolved.evidence_min_length);
    println!();
    println!("Output:");
    println!("  show_optional_osos: {}", resolved.show_optional_osos);
    println!(
        "  format: {}",
        match resolved.format {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    );
}
