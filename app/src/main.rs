#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use casetab_config::OutputFormat;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "casetab")]
#[command(about = "Extract case fields from patient descriptions into a table", long_about = None)]
struct Cli {
    /// Log at debug level (per-case progress)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one record per case and write the result table
    Extract {
        /// Config file (defaults to ~/casetab/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Case description file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Country reference CSV
        #[arg(long)]
        countries: Option<PathBuf>,

        /// Hospital reference CSV
        #[arg(long)]
        hospitals: Option<PathBuf>,

        /// Directory for the result table
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Table format: csv or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Process cases on all cores
        #[arg(short, long)]
        parallel: bool,
    },
    /// Show effective configuration
    Info {
        /// Config file (defaults to ~/casetab/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Extract {
            config,
            input,
            countries,
            hospitals,
            output_dir,
            format,
            parallel,
        } => ExtractStrategy.execute(ExtractInput {
            config,
            input,
            countries,
            hospitals,
            output_dir,
            format,
            parallel,
        }),
        Commands::Info { config } => InfoStrategy.execute(config),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
