//! CLI frontend for the dmgdist damage distribution engine.

mod commands;
mod config;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use config::RenderConfig;

#[derive(Parser)]
#[command(
    name = "dmgdist",
    about = "Damage distributions for defense-attenuated hits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full damage distribution
    Calc {
        /// Base damage (0-9999)
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Defense bitmask (0-9999)
        #[arg(allow_hyphen_values = true)]
        def: String,

        /// Builder to use: fast, reference
        #[arg(short, long, default_value = "fast")]
        algorithm: String,

        /// Output format: table, json, markdown
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Decimal places for the average and percentages
        #[arg(long)]
        digits: Option<usize>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the average damage after defense
    Avg {
        /// Base damage (0-9999)
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Defense bitmask (0-9999)
        #[arg(allow_hyphen_values = true)]
        def: String,

        /// Decimal places for the average
        #[arg(long)]
        digits: Option<usize>,
    },

    /// Check that both builders produce the same distribution
    Verify {
        /// Base damage (0-9999)
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Defense bitmask (0-9999)
        #[arg(allow_hyphen_values = true)]
        def: String,
    },

    /// Roll damage from the distribution
    Roll {
        /// Base damage (0-9999)
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Defense bitmask (0-9999)
        #[arg(allow_hyphen_values = true)]
        def: String,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Calc {
            base,
            def,
            algorithm,
            format,
            digits,
            output,
        } => RenderConfig::from_env()
            .apply_cli(Some(algorithm.as_str()), Some(format.as_str()), digits)
            .map(|cfg| cfg.with_color(output.is_none()))
            .and_then(|cfg| commands::calc::run(&base, &def, &cfg, output.as_deref())),
        Commands::Avg { base, def, digits } => RenderConfig::from_env()
            .apply_cli(None, None, digits)
            .and_then(|cfg| commands::avg::run(&base, &def, &cfg)),
        Commands::Verify { base, def } => commands::verify::run(&base, &def),
        Commands::Roll {
            base,
            def,
            count,
            seed,
        } => commands::roll::run(&base, &def, count, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
