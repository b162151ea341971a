//! Tilecrop CLI - command-line interface
//!
//! This binary exposes the tilecrop library as `slice` and `decode`
//! subcommands.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::decode::DecodeArgs;
use commands::slice::SliceArgs;

#[derive(Debug, Parser)]
#[command(
    name = "tilecrop",
    version,
    about = "Slice an image into a physical-coordinate tile grid with anchor placeholders"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Slice an image into tiles with anchor placeholders
    Slice(SliceArgs),
    /// Decode the physical offset embedded in a tile name
    Decode(DecodeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Slice(args) => commands::slice::run(args),
        Commands::Decode(args) => commands::decode::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
