//! drape CLI: benchmarking and scene simulation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "drape, a Verlet cloth simulation")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene file and print a summary.
    Simulate {
        /// Path to the scene (TOML).
        #[arg(short, long)]
        scene: String,

        /// Override the scene's frame count.
        #[arg(short, long)]
        frames: Option<u32>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_sheet, hoop_net, windy_flag, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a scene file.
    Validate {
        /// Path to the scene (TOML).
        path: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Simulate { scene, frames } => commands::simulate(&scene, frames),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
