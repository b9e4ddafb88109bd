//! brand-alignment: brand assessment scoring and tiered report tool
//!
//! Scores five brand categories, classifies gaps and renders a tiered report.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use brand_alignment::{
    cli::{self, ScoreCommand},
    config::{self, AppConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "brand-alignment")]
#[command(version)]
#[command(about = "Brand alignment scoring and tiered report tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Composite score below --min-score
    3  Error occurred

EXAMPLES:
    # Score an assessment with auto-detected output
    brand-alignment score assessment.json

    # CI gate on the weighted composite
    brand-alignment score assessment.json -o summary --min-score 60

    # Full-tier Markdown report
    brand-alignment score assessment.json --tier full -o markdown -O report.md

    # Read the request from stdin and print only the upsell copy
    cat assessment.json | brand-alignment upsell -")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "BRAND_ALIGNMENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Assessment request JSON file, or `-` for stdin
    request: PathBuf,

    /// Product tier (baseline, extended, full, complete)
    #[arg(long)]
    tier: Option<String>,

    /// Output format (auto: summary on a terminal, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the weighted composite is below this value (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Print the payload fingerprint to stderr
    #[arg(long)]
    fingerprint: bool,
}

/// Arguments for the `upsell` subcommand
#[derive(Parser)]
struct UpsellArgs {
    /// Assessment request JSON file, or `-` for stdin
    request: PathBuf,

    /// Product tier the upsell is written for
    #[arg(long)]
    tier: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment and render its report
    Score(ScoreArgs),

    /// Print only the upsell copy for an assessment
    Upsell(UpsellArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON Schema for the config file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a commented example config file
    ConfigExample,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
}

/// Layer CLI flags over the discovered config file and validate the result.
fn effective_config(cli: &Cli, overrides: AppConfig) -> Result<AppConfig> {
    let (config, _) = AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)?;

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Score(args) => {
            let overrides = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file.clone())
                .no_color(cli.no_color)
                .quiet(cli.quiet)
                .min_score(args.min_score)
                .build();
            let config = effective_config(&cli, overrides)?;
            let command = ScoreCommand {
                request: args.request.clone(),
                tier: args.tier.clone(),
                fingerprint: args.fingerprint,
            };
            cli::run_score(&command, &config)
        }

        Commands::Upsell(args) => {
            let overrides = AppConfig::builder().quiet(cli.quiet).build();
            let config = effective_config(&cli, overrides)?;
            let command = ScoreCommand {
                request: args.request.clone(),
                tier: args.tier.clone(),
                fingerprint: false,
            };
            cli::run_upsell(&command, &config)?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "brand-alignment",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigExample => {
            print!("{}", config::generate_example_config());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref())?;
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        ::dirs::config_dir()
                            .map(|p| p.join("brand-alignment").display().to_string()),
                        ::dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in config::CONFIG_FILE_NAMES {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => match cli.config.as_deref() {
                            Some(path) => eprintln!("Config file not found: {}", path.display()),
                            None => eprintln!("No config file found."),
                        },
                    }
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
