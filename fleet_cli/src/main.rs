use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    dashboard::DashboardArgs, fleet::FleetArgs, generate::GenerateSubcommands,
    match_order::MatchArgs,
};

mod dashboard;
mod fleet;
mod generate;
mod inputs;
mod match_order;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the CSV tables
    #[arg(long, global = true, env = "FLEET_DATA_DIR", default_value = ".")]
    data: PathBuf,

    /// Model artifacts file (defaults to fleet_model_artifacts.json inside the data directory)
    #[arg(long, global = true, env = "FLEET_ARTIFACTS_PATH")]
    artifacts: Option<PathBuf>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the vehicles able to carry an order
    #[command(name = "match", visible_alias = "m")]
    Match {
        #[command(flatten)]
        args: MatchArgs,
    },
    /// Print the dashboard KPIs
    Dashboard {
        #[command(flatten)]
        args: DashboardArgs,
    },
    /// Print the fleet table
    Fleet {
        #[command(flatten)]
        args: FleetArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let inputs = inputs::Inputs {
        data_dir: cli.data,
        artifacts_path: cli.artifacts,
    };

    match cli.command {
        Some(Commands::Match { args }) => match_order::run(&inputs, args)?,
        Some(Commands::Dashboard { args }) => dashboard::run(&inputs, args)?,
        Some(Commands::Fleet { args }) => fleet::run(&inputs, args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
