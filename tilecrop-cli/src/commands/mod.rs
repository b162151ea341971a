//! CLI subcommand implementations.

pub mod decode;
pub mod slice;
