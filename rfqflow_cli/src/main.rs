mod commands;
mod config;
mod record_loader;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfqflow_core::{NextPolicy, Plan};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rfqflow")]
#[command(author, version, about = "Show RFQ workflow progress", long_about = None)]
struct Cli {
    /// more logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// derive progress for the RFQ record(s) in a file
    Progress {
        /// .json, .yaml or .yml file with one record or an array; `-` reads JSON from stdin
        input: PathBuf,

        /// milestone plan: pipeline or staged
        #[arg(long)]
        plan: Option<Plan>,

        /// next-action policy: first-gap or strict-chain
        #[arg(long)]
        policy: Option<NextPolicy>,

        #[arg(long)]
        json: bool,
    },

    /// list milestone plans and policies
    Plans,

    /// show the effective configuration
    Config,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Progress {
            input,
            plan,
            policy,
            json,
        } => {
            commands::progress::run(input, plan, policy, json)?;
        }
        Commands::Plans => {
            commands::plans::list()?;
        }
        Commands::Config => {
            commands::config::show()?;
        }
    }
    Ok(())
}
