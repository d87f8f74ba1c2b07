use clap::{Args, Subcommand};
use std::path::PathBuf;

use telecipher_core::MAX_INPUT_LEN;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod input;
pub mod table;
pub mod transform;
pub mod upper;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a payload in place (rotation, then substitution).
    Encode(EncodeArgs),
    /// Decode a payload produced by `encode` with the same key.
    Decode(DecodeArgs),
    /// Uppercase ASCII letters only.
    Upper(UpperArgs),
    /// Print the substitution table.
    Table(TableArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => transform::run_encode(args, format),
        Command::Decode(args) => transform::run_decode(args, format),
        Command::Upper(args) => upper::run(args, format),
        Command::Table(args) => table::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Payload text. Read from stdin when neither TEXT nor --file is given.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,
    /// Read payload from file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Rotation key (must be > 0 and match on both ends).
    #[arg(long, short = 'k', env = "TELECIPHER_KEY", allow_negative_numbers = true)]
    pub key: i32,
    /// Maximum payload length (may only lower the built-in 10000).
    #[arg(long, env = "TELECIPHER_MAX_LEN", default_value_t = MAX_INPUT_LEN)]
    pub max_len: usize,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    #[command(flatten)]
    pub key: KeyArgs,
    /// Uppercase the payload before encoding.
    #[arg(long)]
    pub upper: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
    #[command(flatten)]
    pub key: KeyArgs,
}

#[derive(Args, Debug)]
pub struct UpperArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args, Debug, Default)]
pub struct TableArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
