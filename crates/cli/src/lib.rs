pub mod commands;
pub mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "palletizer",
    about = "Pallet loading planner CLI",
    long_about = "Compute pallet loading plans: the best stacking orientation for a box, \
boxes per layer, and a per-pallet breakdown of a shipment quantity.",
    after_help = "Examples:\n  palletizer plan --size \"27.3 x 15.9 x 32.9\" --quantity 250 --weight 12.5\n  palletizer plan --size 20x16x12 --quantity 100 --weight 10 --orientation H --json\n  palletizer config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compute a pallet loading plan for a box size and quantity")]
    Plan {
        #[arg(long, help = "Box size as three dimensions in inches, e.g. \"27.3 x 15.9 x 32.9\"")]
        size: String,
        #[arg(long, help = "Number of boxes to palletize")]
        quantity: u64,
        #[arg(long, help = "Weight of one box in pounds")]
        weight: f64,
        #[arg(long, help = "Force which dimension stands vertical: L, W, or H")]
        orientation: Option<String>,
        #[arg(long, help = "Path to a TOML file overriding the pallet profile")]
        config: Option<PathBuf>,
        #[arg(long, help = "Emit the plan as machine-readable JSON")]
        json: bool,
    },
    #[command(about = "Show the effective pallet profile")]
    Config {
        #[arg(long, help = "Path to a TOML file overriding the pallet profile")]
        config: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Plan { size, quantity, weight, orientation, config, json } => {
            commands::plan::run(commands::plan::PlanArgs {
                size,
                quantity,
                weight,
                orientation,
                config,
                json,
            })
        }
        Command::Config { config } => commands::config::run(config.as_deref()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
