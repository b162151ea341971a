//! The `decode` command: recover the offset embedded in a tile name.

use clap::Args;

use tilecrop::extract_offset;

use crate::error::CliError;

/// Arguments for `tilecrop decode`.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Tile name previously produced by `tilecrop slice`
    pub name: String,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let offset = extract_offset(&args.name)?;
    println!("dx = {}", offset.dx);
    println!("dy = {}", offset.dy);
    Ok(())
}
